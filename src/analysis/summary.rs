//! Scalar summaries: total / mean / max of a rental count, and the descriptive
//! statistics table shown at the top of the dashboard.

use crate::analysis::stats::quantile_sorted;
use crate::error::AnalyticsError;
use crate::types::grain::Grain;
use crate::types::rental_table::RentalTable;
use ordered_float::OrderedFloat;
use polars::prelude::{ChunkAgg, ChunkVar, DataType};
use serde::Serialize;

/// Sum, mean and maximum of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub sum: f64,
    /// `None` when the column has no non-null value.
    pub mean: Option<f64>,
    pub max: Option<f64>,
}

impl SummaryMetrics {
    pub fn compute(table: &RentalTable, column: &str) -> Result<Self, AnalyticsError> {
        let values = table.column(column)?.cast(&DataType::Float64)?;
        let values = values.f64()?;
        Ok(Self {
            sum: values.sum().unwrap_or(0.0),
            mean: values.mean(),
            max: values.max(),
        })
    }

    /// Metrics of the rental count at the given grain.
    pub fn for_grain(table: &RentalTable, grain: Grain) -> Result<Self, AnalyticsError> {
        Self::compute(table, grain.count_column())
    }

    /// Total formatted with thousands separators, e.g. `"3,292,679"`.
    pub fn display_sum(&self) -> String {
        format_thousands(self.sum)
    }

    /// Mean rounded to zero decimals, or `"-"` when undefined.
    pub fn display_mean(&self) -> String {
        self.mean.map_or_else(|| "-".to_string(), |m| format!("{:.0}", m))
    }

    /// Maximum formatted with thousands separators, or `"-"` when undefined.
    pub fn display_max(&self) -> String {
        self.max.map_or_else(|| "-".to_string(), format_thousands)
    }
}

/// Formats a value rounded to an integer with `,` between groups of three digits.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.0}", value.abs());
    let mut result = String::new();
    for (i, c) in rounded.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if value < 0.0 && rounded != "0" {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Descriptive statistics of a single column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescription {
    pub column: String,
    /// Number of non-null values.
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnDescription {
    pub fn compute(table: &RentalTable, column: &str) -> Result<Self, AnalyticsError> {
        let casted = table.column(column)?.cast(&DataType::Float64)?;
        let values = casted.f64()?;

        let mut sorted: Vec<f64> = values.into_iter().flatten().collect();
        sorted.sort_by_key(|&v| OrderedFloat(v));
        let quantile = |q: f64| (!sorted.is_empty()).then(|| quantile_sorted(&sorted, q));

        Ok(Self {
            column: column.to_string(),
            count: sorted.len(),
            mean: values.mean(),
            std: values.std(1),
            min: values.min(),
            q25: quantile(0.25),
            median: quantile(0.5),
            q75: quantile(0.75),
            max: values.max(),
        })
    }
}

/// The descriptive statistics table of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetDescription {
    pub rows: usize,
    pub columns: Vec<ColumnDescription>,
}

impl DatasetDescription {
    /// Describes every integer or float column in frame order: the CSV's numeric columns,
    /// including any beyond the required ones, followed by the derived calendar columns.
    pub fn compute(table: &RentalTable) -> Result<Self, AnalyticsError> {
        let columns = table
            .frame()
            .get_columns()
            .iter()
            .filter(|column| column.dtype().is_integer() || column.dtype().is_float())
            .map(|column| ColumnDescription::compute(table, column.name()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows: table.height(),
            columns,
        })
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDescription> {
        self.columns.iter().find(|c| c.column == name)
    }
}
