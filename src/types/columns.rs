//! Column names of the rental table, both the CSV source columns and the ones derived at load.

// Source
pub const COL_DATE: &str = "dteday";
pub const COL_HR: &str = "hr";
pub const COL_CNT_HOUR: &str = "cnt_hour"; // Rentals in the hour
pub const COL_CNT_DAY: &str = "cnt_day"; // Rentals on the whole day
pub const COL_WEATHER_CODE: &str = "weathersit_day";

// Hour grain environment
pub const COL_TEMP_HOUR: &str = "temp_hour";
pub const COL_HUM_HOUR: &str = "hum_hour";
pub const COL_WINDSPEED_HOUR: &str = "windspeed_hour";

// Day grain environment
pub const COL_TEMP_DAY: &str = "temp_day";
pub const COL_HUM_DAY: &str = "hum_day";
pub const COL_WINDSPEED_DAY: &str = "windspeed_day";

// Derived
pub const COL_HOUR: &str = "hour";
pub const COL_MONTH: &str = "month";
pub const COL_DAY_OF_WEEK: &str = "day_of_week";
pub const COL_WEATHER_LABEL: &str = "weather_label";

/// Columns that must be present in the CSV header.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    COL_DATE,
    COL_HR,
    COL_CNT_HOUR,
    COL_CNT_DAY,
    COL_WEATHER_CODE,
    COL_TEMP_HOUR,
    COL_HUM_HOUR,
    COL_WINDSPEED_HOUR,
    COL_TEMP_DAY,
    COL_HUM_DAY,
    COL_WINDSPEED_DAY,
];

/// Integer source columns, normalised to `Int64` at load.
pub const INTEGER_SOURCE_COLUMNS: [&str; 4] = [COL_HR, COL_CNT_HOUR, COL_CNT_DAY, COL_WEATHER_CODE];

/// Float source columns, normalised to `Float64` at load.
pub const FLOAT_SOURCE_COLUMNS: [&str; 6] = [
    COL_TEMP_HOUR,
    COL_HUM_HOUR,
    COL_WINDSPEED_HOUR,
    COL_TEMP_DAY,
    COL_HUM_DAY,
    COL_WINDSPEED_DAY,
];
