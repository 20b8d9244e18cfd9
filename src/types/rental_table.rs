//! Contains the `RentalTable` structure wrapping the loaded rental data.

use crate::error::AnalyticsError;
use crate::types::columns::COL_DATE;
use chrono::NaiveDate;
use polars::prelude::{ChunkAgg, Column, DataFrame, DataType, IntoLazy, LazyFrame};

/// The rental record table: one row per observed hour, pre-joined with the daily totals of
/// that hour's calendar day.
///
/// Instances are produced by [`crate::RentalDataLoader::load`] with every derived column
/// (`hour`, `month`, `day_of_week`, `weather_label`) already populated. The table is never
/// mutated after load; every query in [`crate::analysis`] only reads it.
#[derive(Debug, Clone)]
pub struct RentalTable {
    frame: DataFrame,
}

impl RentalTable {
    /// Wraps a `DataFrame` that already carries the derived columns.
    pub(crate) fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// The underlying Polars `DataFrame`.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// A `LazyFrame` over a cheap clone of the table, for building queries.
    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Retrieves a column by name.
    pub fn column(&self, name: &str) -> Result<&Column, AnalyticsError> {
        self.frame
            .column(name)
            .map_err(|e| AnalyticsError::ColumnNotFound(name.to_string(), e))
    }

    /// Reads a numeric column as `f64` values, keeping nulls as `None`.
    pub fn float_values(&self, name: &str) -> Result<Vec<Option<f64>>, AnalyticsError> {
        let casted = self.column(name)?.cast(&DataType::Float64)?;
        Ok(casted.f64()?.into_iter().collect())
    }

    /// First and last calendar date covered by the table, or `None` when it is empty.
    pub fn date_range(&self) -> Result<Option<(NaiveDate, NaiveDate)>, AnalyticsError> {
        let dates = self.column(COL_DATE)?.date()?;
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).ok_or(AnalyticsError::DateOutOfRange)?;
        let to_date = |days: i32| {
            epoch
                .checked_add_signed(chrono::Duration::days(days as i64))
                .ok_or(AnalyticsError::DateOutOfRange)
        };
        match (dates.min(), dates.max()) {
            (Some(first), Some(last)) => Ok(Some((to_date(first)?, to_date(last)?))),
            _ => Ok(None),
        }
    }
}
