//! Defines the `WeatherCondition` enum, mapping the rental dataset's numeric weather codes
//! (`weathersit_day`) to the labels shown on the dashboard.

use serde::Serialize;
use std::fmt;

/// Label used for rows whose weather code is not one of the four known codes.
pub const UNKNOWN_WEATHER_LABEL: &str = "Tidak Diketahui";

/// Represents the weather situation code recorded for a rental day.
///
/// The dataset encodes the weather as an integer from 1 to 4. You can convert a raw
/// code into this enum with [`WeatherCondition::from_i64`], and get the dashboard label
/// with [`WeatherCondition::label`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
pub enum WeatherCondition {
    /// Code 1: Clear or few clouds.
    Clear = 1,
    /// Code 2: Mist or cloudy.
    Cloudy = 2,
    /// Code 3: Light snow or light rain.
    LightRain = 3,
    /// Code 4: Heavy rain, ice pellets or thunderstorm.
    HeavyRain = 4,
}

impl WeatherCondition {
    /// Every known condition, in code order.
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Clear,
        WeatherCondition::Cloudy,
        WeatherCondition::LightRain,
        WeatherCondition::HeavyRain,
    ];

    /// Attempts to convert a weather code into a `WeatherCondition` variant.
    ///
    /// # Returns
    ///
    /// * `Some(WeatherCondition)` for codes 1 to 4.
    /// * `None` for any other value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bike_rent_analytics::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::from_i64(2), Some(WeatherCondition::Cloudy));
    /// assert_eq!(WeatherCondition::from_i64(9), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(WeatherCondition::Clear),
            2 => Some(WeatherCondition::Cloudy),
            3 => Some(WeatherCondition::LightRain),
            4 => Some(WeatherCondition::HeavyRain),
            _ => None,
        }
    }

    /// The integer code as stored in the dataset.
    pub fn code(&self) -> i64 {
        *self as i64
    }

    /// The human-readable label used on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Cerah",
            WeatherCondition::Cloudy => "Berawan",
            WeatherCondition::LightRain => "Hujan Ringan",
            WeatherCondition::HeavyRain => "Hujan Lebat",
        }
    }

    /// Inverse of [`WeatherCondition::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A weather bucket used when grouping rentals by weather.
///
/// Rows with an unmapped code end up in [`WeatherGroup::Unknown`], which sorts after
/// every known condition.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
pub enum WeatherGroup {
    Known(WeatherCondition),
    Unknown,
}

impl WeatherGroup {
    /// Resolves the value of the derived `weather_label` column. A missing label is `Unknown`.
    pub fn from_label(label: Option<&str>) -> Self {
        label
            .and_then(WeatherCondition::from_label)
            .map_or(WeatherGroup::Unknown, WeatherGroup::Known)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherGroup::Known(condition) => condition.label(),
            WeatherGroup::Unknown => UNKNOWN_WEATHER_LABEL,
        }
    }
}

impl fmt::Display for WeatherGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
