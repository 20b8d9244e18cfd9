//! Pairwise Pearson correlation between numeric columns.

use crate::analysis::stats::{has_variance, pearson};
use crate::error::AnalyticsError;
use crate::types::grain::Grain;
use crate::types::rental_table::RentalTable;
use serde::Serialize;

/// A square, symmetric correlation matrix.
///
/// `values[i][j]` is the correlation between `columns[i]` and `columns[j]`. Entries are
/// NaN where the correlation is undefined (missing values, fewer than two rows, or a
/// constant column).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlates every pair of the given columns.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bike_rent_analytics::{CorrelationMatrix, RentalDataLoader};
    /// use std::path::Path;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = RentalDataLoader::load(Path::new("dataset_all.csv"))?;
    /// let matrix = CorrelationMatrix::compute(&table, &["temp_hour", "cnt_hour"])?;
    /// println!("temperature vs rentals: {:.2}", matrix.get("temp_hour", "cnt_hour").unwrap());
    /// # Ok(())
    /// # }
    /// ```
    pub fn compute(table: &RentalTable, columns: &[&str]) -> Result<Self, AnalyticsError> {
        let series = columns
            .iter()
            .map(|name| table.float_values(name))
            .collect::<Result<Vec<_>, _>>()?;

        let n = columns.len();
        let mut values = vec![vec![f64::NAN; n]; n];
        for i in 0..n {
            values[i][i] = if series[i].iter().all(Option::is_some) && has_variance(&series[i]) {
                1.0
            } else {
                f64::NAN
            };
            for j in (i + 1)..n {
                let r = pearson(&series[i], &series[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            values,
        })
    }

    /// Correlates temperature, humidity, windspeed and rental count at the given grain.
    pub fn for_grain(table: &RentalTable, grain: Grain) -> Result<Self, AnalyticsError> {
        Self::compute(table, &grain.correlation_columns())
    }

    /// The correlation between two named columns.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Flattens the matrix into `(row, column, value)` triples, row-major.
    pub fn cells(&self) -> Vec<(&str, &str, f64)> {
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                self.columns
                    .iter()
                    .enumerate()
                    .map(move |(j, column)| (row.as_str(), column.as_str(), self.values[i][j]))
            })
            .collect()
    }
}
