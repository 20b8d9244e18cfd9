use crate::rental_data::error::DataLoadError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Date value is outside the supported calendar range")]
    DateOutOfRange,

    #[error("Failed to serialize report")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report to '{0}'")]
    ReportWrite(PathBuf, #[source] std::io::Error),
}
