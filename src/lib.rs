//! Descriptive analytics over hourly/daily bike rental data.
//!
//! The dataset is loaded once into a [`RentalTable`] and queried read-only: averages per
//! hour, weekday and month, the effect of weather on daily rentals, correlation matrices
//! and summary metrics. [`ReportGenerator`] runs every query and bundles the results in a
//! [`Report`]; with the `dashboard` feature the report renders to an HTML page.
//!
//! ```no_run
//! use bike_rent_analytics::{RentalDataLoader, TemporalAverages, TemporalKey};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = RentalDataLoader::load(Path::new("dataset_all.csv"))?;
//! let hourly = TemporalAverages::compute(&table, TemporalKey::Hour)?;
//! if let Some((hour, mean)) = hourly.peak() {
//!     println!("Busiest hour {}:00 with {:.0} rentals on average", hour, mean);
//! }
//! # Ok(())
//! # }
//! ```

mod analysis;
mod error;
#[cfg(feature = "dashboard")]
pub mod render;
mod rental_data;
mod report;
#[cfg(test)]
mod test_support;
mod types;

pub use error::AnalyticsError;
pub use rental_data::data_loader::{RentalDataLoader, DATE_FORMAT};
pub use rental_data::error::DataLoadError;
pub use rental_data::frame_cache::FrameCache;

pub use types::columns;
pub use types::grain::Grain;
pub use types::rental_table::RentalTable;
pub use types::temporal_key::TemporalKey;
pub use types::weather_condition::{WeatherCondition, WeatherGroup, UNKNOWN_WEATHER_LABEL};

pub use analysis::correlation::CorrelationMatrix;
pub use analysis::summary::{
    format_thousands, ColumnDescription, DatasetDescription, SummaryMetrics,
};
pub use analysis::temporal::TemporalAverages;
pub use analysis::weather::{FiveNumberSummary, WeatherDistribution, WeatherEffect};

pub use report::generator::{Report, ReportGenerator, DEFAULT_DATA_PATH};
pub use report::narrative;
pub use report::narrative::Recommendation;
