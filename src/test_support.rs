//! CSV fixtures shared by the unit tests.

use crate::rental_data::data_loader::RentalDataLoader;
use crate::types::rental_table::RentalTable;
use std::io::Write;
use tempfile::NamedTempFile;

pub const CSV_HEADER: &str = "dteday,hr,cnt_hour,cnt_day,weathersit_day,temp_hour,hum_hour,windspeed_hour,temp_day,hum_day,windspeed_day";

/// One CSV row. Environmental readings default to fixed values unless overridden.
#[derive(Debug, Clone)]
pub struct RentalRow {
    pub date: &'static str,
    pub hr: i64,
    pub cnt_hour: i64,
    pub cnt_day: i64,
    pub weather_code: i64,
    pub hour_env: (f64, f64, f64),
    pub day_env: (f64, f64, f64),
}

impl RentalRow {
    pub fn new(date: &'static str, hr: i64, cnt_hour: i64, weather_code: i64) -> Self {
        Self {
            date,
            hr,
            cnt_hour,
            cnt_day: cnt_hour * 10,
            weather_code,
            hour_env: (0.3, 0.6, 0.2),
            day_env: (0.3, 0.6, 0.2),
        }
    }

    pub fn cnt_day(mut self, cnt_day: i64) -> Self {
        self.cnt_day = cnt_day;
        self
    }

    pub fn hour_env(mut self, temp: f64, hum: f64, windspeed: f64) -> Self {
        self.hour_env = (temp, hum, windspeed);
        self
    }

    pub fn day_env(mut self, temp: f64, hum: f64, windspeed: f64) -> Self {
        self.day_env = (temp, hum, windspeed);
        self
    }

    fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            self.date,
            self.hr,
            self.cnt_hour,
            self.cnt_day,
            self.weather_code,
            self.hour_env.0,
            self.hour_env.1,
            self.hour_env.2,
            self.day_env.0,
            self.day_env.1,
            self.day_env.2,
        )
    }
}

pub fn write_raw_csv(contents: &str) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub fn write_csv(rows: &[RentalRow]) -> std::io::Result<NamedTempFile> {
    let mut contents = String::from(CSV_HEADER);
    contents.push('\n');
    for row in rows {
        contents.push_str(&row.to_csv_line());
        contents.push('\n');
    }
    write_raw_csv(&contents)
}

/// Writes the rows to a temporary CSV and loads them. The file is removed on return.
pub fn load_rows(rows: &[RentalRow]) -> Result<RentalTable, Box<dyn std::error::Error>> {
    let file = write_csv(rows)?;
    Ok(RentalDataLoader::load(file.path())?)
}
