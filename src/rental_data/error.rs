use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Failed to read metadata for data file '{0}'")]
    SourceMetadata(PathBuf, #[source] std::io::Error),

    #[error("Failed to read CSV data from '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Missing required column '{column}' in '{path}'")]
    MissingColumn { path: PathBuf, column: String },

    // Covers date parsing, which runs while collecting the derived frame
    #[error("Failed to derive calendar columns for '{path}'")]
    Derivation {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Invalid values in column '{column}': {message}")]
    InvalidColumn { column: String, message: String },
}
