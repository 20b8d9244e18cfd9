//! Daily rentals broken down by weather condition.

use crate::analysis::stats::quantile_sorted;
use crate::error::AnalyticsError;
use crate::types::columns::{COL_CNT_DAY, COL_WEATHER_LABEL};
use crate::types::rental_table::RentalTable;
use crate::types::weather_condition::WeatherGroup;
use ordered_float::OrderedFloat;
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

const COL_MEAN: &str = "mean";

/// Minimum, quartiles and maximum of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Summarises the values, or returns `None` when there are none.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by_key(|&v| OrderedFloat(v));
        Some(Self {
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// The `cnt_day` values of one weather group, with their five-number summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherDistribution {
    pub group: WeatherGroup,
    pub values: Vec<f64>,
    pub summary: Option<FiveNumberSummary>,
}

/// How the weather relates to daily rentals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherEffect {
    /// One distribution per observed group, ordered by weather code with unknown last.
    pub distributions: Vec<WeatherDistribution>,
    /// Mean `cnt_day` per observed group, highest first.
    pub means: Vec<(WeatherGroup, f64)>,
}

impl WeatherEffect {
    pub fn compute(table: &RentalTable) -> Result<Self, AnalyticsError> {
        Ok(Self {
            distributions: Self::distributions(table)?,
            means: Self::means(table)?,
        })
    }

    fn distributions(table: &RentalTable) -> Result<Vec<WeatherDistribution>, AnalyticsError> {
        let labels = table.column(COL_WEATHER_LABEL)?.str()?;
        let counts = table.float_values(COL_CNT_DAY)?;

        let mut grouped: BTreeMap<WeatherGroup, Vec<f64>> = BTreeMap::new();
        for (label, count) in labels.into_iter().zip(counts) {
            if let Some(count) = count {
                grouped
                    .entry(WeatherGroup::from_label(label))
                    .or_default()
                    .push(count);
            }
        }

        Ok(grouped
            .into_iter()
            .map(|(group, values)| WeatherDistribution {
                group,
                summary: FiveNumberSummary::from_values(&values),
                values,
            })
            .collect())
    }

    fn means(table: &RentalTable) -> Result<Vec<(WeatherGroup, f64)>, AnalyticsError> {
        let grouped = table
            .lazy()
            .group_by([col(COL_WEATHER_LABEL)])
            .agg([col(COL_CNT_DAY)
                .cast(DataType::Float64)
                .mean()
                .alias(COL_MEAN)])
            .collect()?;

        let labels = grouped.column(COL_WEATHER_LABEL)?.str()?;
        let means = grouped.column(COL_MEAN)?.f64()?;
        let mut result: Vec<(WeatherGroup, f64)> = labels
            .into_iter()
            .zip(means.into_iter())
            .filter_map(|(label, mean)| Some((WeatherGroup::from_label(label), mean?)))
            .collect();

        // Highest mean first, ties in group order
        result.sort_by(|(a_group, a_mean), (b_group, b_mean)| {
            OrderedFloat(*b_mean)
                .cmp(&OrderedFloat(*a_mean))
                .then(a_group.cmp(b_group))
        });
        Ok(result)
    }

    /// The distribution for a single group, if any row fell into it.
    pub fn distribution(&self, group: WeatherGroup) -> Option<&WeatherDistribution> {
        self.distributions.iter().find(|d| d.group == group)
    }
}
