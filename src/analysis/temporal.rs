//! Average hourly rentals grouped by hour, day of week or month.

use crate::error::AnalyticsError;
use crate::types::columns::COL_CNT_HOUR;
use crate::types::rental_table::RentalTable;
use crate::types::temporal_key::TemporalKey;
use log::debug;
use ordered_float::OrderedFloat;
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

const COL_MEAN: &str = "mean";

/// Mean `cnt_hour` per observed value of a [`TemporalKey`], in ascending key order.
///
/// Keys without any row are absent rather than zero. A key observed once has that
/// single value as its mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalAverages {
    pub key: TemporalKey,
    pub averages: BTreeMap<i32, f64>,
}

impl TemporalAverages {
    /// Groups the table by `key` and averages the hourly rental count.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bike_rent_analytics::{RentalDataLoader, TemporalAverages, TemporalKey};
    /// use std::path::Path;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = RentalDataLoader::load(Path::new("dataset_all.csv"))?;
    /// let hourly = TemporalAverages::compute(&table, TemporalKey::Hour)?;
    /// if let Some((hour, mean)) = hourly.peak() {
    ///     println!("Busiest hour is {}:00 with {:.0} rentals on average", hour, mean);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn compute(table: &RentalTable, key: TemporalKey) -> Result<Self, AnalyticsError> {
        let grouped = table
            .lazy()
            .filter(col(key.column()).is_not_null())
            .group_by([col(key.column())])
            .agg([col(COL_CNT_HOUR)
                .cast(DataType::Float64)
                .mean()
                .alias(COL_MEAN)])
            .collect()?;

        let keys = grouped.column(key.column())?.cast(&DataType::Int32)?;
        let means = grouped.column(COL_MEAN)?;
        let averages: BTreeMap<i32, f64> = keys
            .i32()?
            .into_iter()
            .zip(means.f64()?.into_iter())
            .filter_map(|(k, mean)| Some((k?, mean?)))
            .collect();

        debug!("Grouped rentals by {} into {} keys", key, averages.len());
        Ok(Self { key, averages })
    }

    /// The key with the highest mean and that mean.
    ///
    /// Ties resolve to the smallest key. `None` when no key was observed.
    pub fn peak(&self) -> Option<(i32, f64)> {
        self.averages
            .iter()
            .map(|(&k, &mean)| (k, mean))
            // max_by_key keeps the last maximum, so walk keys in descending order
            .rev()
            .max_by_key(|&(_, mean)| OrderedFloat(mean))
    }

    /// Entries paired with their display label (`"17:00"`, `"Senin"`, `"Jan"`).
    pub fn labelled(&self) -> Vec<(String, f64)> {
        self.averages
            .iter()
            .map(|(&k, &mean)| (self.key.display_key(k), mean))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.averages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }
}
