//! Defines the time grains present in the rental table.

use crate::types::columns::*;
use serde::Serialize;
use std::fmt;

/// The time resolution of a measurement.
///
/// Each row of the rental table is pre-joined: it carries hour-scale measurements
/// (rentals and weather for that hour) next to day-scale measurements (totals and
/// averages for the whole day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grain {
    /// Measurements for a single hour.
    Hourly,
    /// Measurements for the whole calendar day.
    Daily,
}

impl Grain {
    pub(crate) fn suffix(&self) -> &'static str {
        match self {
            Grain::Hourly => "hour",
            Grain::Daily => "day",
        }
    }

    /// The rental-count column at this grain.
    pub fn count_column(&self) -> &'static str {
        match self {
            Grain::Hourly => COL_CNT_HOUR,
            Grain::Daily => COL_CNT_DAY,
        }
    }

    /// Temperature, humidity, windspeed and rental count at this grain, in that order.
    pub fn correlation_columns(&self) -> [&'static str; 4] {
        match self {
            Grain::Hourly => [COL_TEMP_HOUR, COL_HUM_HOUR, COL_WINDSPEED_HOUR, COL_CNT_HOUR],
            Grain::Daily => [COL_TEMP_DAY, COL_HUM_DAY, COL_WINDSPEED_DAY, COL_CNT_DAY],
        }
    }
}

/// Formats a `Grain` using its column suffix.
///
/// # Examples
///
/// ```
/// use bike_rent_analytics::Grain;
///
/// assert_eq!(Grain::Hourly.to_string(), "hour");
/// assert_eq!(Grain::Daily.count_column(), "cnt_day");
/// ```
impl fmt::Display for Grain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}
