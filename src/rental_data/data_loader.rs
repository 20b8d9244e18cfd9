use crate::rental_data::error::DataLoadError;
use crate::types::columns::*;
use crate::types::rental_table::RentalTable;
use crate::types::weather_condition::WeatherCondition;
use log::{debug, info, warn};
use polars::prelude::*;
use std::path::Path;

/// Date format of the `dteday` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads the rental CSV and derives the calendar and weather columns.
pub struct RentalDataLoader;

impl RentalDataLoader {
    /// Loads the CSV at `path` into a [`RentalTable`] with every derived column populated.
    ///
    /// Rows are never dropped: an unparseable or missing date, or an hour outside 0..=23,
    /// fails the whole load. Weather codes outside 1..=4 get a null label and are only
    /// reported with a warning.
    pub fn load(path: &Path) -> Result<RentalTable, DataLoadError> {
        std::fs::metadata(path)
            .map_err(|e| DataLoadError::SourceMetadata(path.to_path_buf(), e))?;

        let raw = Self::read_csv(path)?;
        Self::check_required_columns(&raw, path)?;
        let df = Self::derive_columns(raw, path)?;
        Self::check_invariants(&df, path)?;
        Self::warn_unmapped_weather(&df);

        info!(
            "Loaded {} rental rows ({} columns) from {:?}",
            df.height(),
            df.width(),
            path
        );
        Ok(RentalTable::new(df))
    }

    fn read_csv(path: &Path) -> Result<DataFrame, DataLoadError> {
        debug!("Reading CSV {:?}", path);
        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| DataLoadError::CsvRead {
                path: path.to_path_buf(),
                source: e,
            })?
            .finish()
            .map_err(|e| DataLoadError::CsvRead {
                path: path.to_path_buf(),
                source: e,
            })
    }

    fn check_required_columns(df: &DataFrame, path: &Path) -> Result<(), DataLoadError> {
        match REQUIRED_COLUMNS
            .iter()
            .find(|name| df.get_column_index(name).is_none())
        {
            Some(missing) => {
                warn!("Column '{}' missing from {:?}", missing, path);
                Err(DataLoadError::MissingColumn {
                    path: path.to_path_buf(),
                    column: missing.to_string(),
                })
            }
            None => Ok(()),
        }
    }

    /// Normalises the numeric source types, parses `dteday` into a `Date` and adds `hour`,
    /// `month`, `day_of_week` and `weather_label`.
    fn derive_columns(df: DataFrame, path: &Path) -> Result<DataFrame, DataLoadError> {
        let date_options = StrptimeOptions {
            format: Some(DATE_FORMAT.into()),
            strict: true,
            ..Default::default()
        };

        // A header-only CSV infers every column as String
        let numeric_sources: Vec<Expr> = INTEGER_SOURCE_COLUMNS
            .iter()
            .map(|name| col(*name).strict_cast(DataType::Int64))
            .chain(
                FLOAT_SOURCE_COLUMNS
                    .iter()
                    .map(|name| col(*name).strict_cast(DataType::Float64)),
            )
            .collect();

        df.lazy()
            .with_columns(numeric_sources)
            .with_columns([
                col(COL_DATE).str().to_date(date_options).alias(COL_DATE),
                col(COL_HR).cast(DataType::Int32).alias(COL_HOUR),
            ])
            .with_columns([
                col(COL_DATE)
                    .dt()
                    .month()
                    .cast(DataType::Int32)
                    .alias(COL_MONTH),
                // Polars weekdays are ISO (Monday = 1), the dashboard counts from Monday = 0
                (col(COL_DATE).dt().weekday().cast(DataType::Int32) - lit(1))
                    .alias(COL_DAY_OF_WEEK),
                weather_label_expr(),
            ])
            .collect()
            .map_err(|e| DataLoadError::Derivation {
                path: path.to_path_buf(),
                source: e,
            })
    }

    fn check_invariants(df: &DataFrame, path: &Path) -> Result<(), DataLoadError> {
        let derivation_error = |e: PolarsError| DataLoadError::Derivation {
            path: path.to_path_buf(),
            source: e,
        };

        let null_dates = df.column(COL_DATE).map_err(derivation_error)?.null_count();
        if null_dates > 0 {
            return Err(DataLoadError::InvalidColumn {
                column: COL_DATE.to_string(),
                message: format!("{} rows have no date", null_dates),
            });
        }

        let hours = df.column(COL_HOUR).map_err(derivation_error)?;
        if hours.null_count() > 0 {
            return Err(DataLoadError::InvalidColumn {
                column: COL_HR.to_string(),
                message: format!("{} rows have no hour", hours.null_count()),
            });
        }
        let out_of_range = hours
            .i32()
            .map_err(derivation_error)?
            .into_iter()
            .flatten()
            .find(|hour| !(0..=23).contains(hour));
        if let Some(hour) = out_of_range {
            return Err(DataLoadError::InvalidColumn {
                column: COL_HR.to_string(),
                message: format!("hour {} is outside 0..=23", hour),
            });
        }

        Ok(())
    }

    fn warn_unmapped_weather(df: &DataFrame) {
        let unmapped = df
            .column(COL_WEATHER_LABEL)
            .map(|c| c.null_count())
            .unwrap_or(0);
        if unmapped > 0 {
            warn!(
                "{} rows have a weather code outside 1..=4 and are labelled as unknown",
                unmapped
            );
        }
    }
}

/// Maps `weathersit_day` to its label, leaving unmapped codes null.
fn weather_label_expr() -> Expr {
    WeatherCondition::ALL
        .iter()
        .rev()
        .fold(lit(NULL).cast(DataType::String), |otherwise, condition| {
            when(col(COL_WEATHER_CODE).eq(lit(condition.code())))
                .then(lit(condition.label()))
                .otherwise(otherwise)
        })
        .alias(COL_WEATHER_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::generator::Report;
    use crate::test_support::{write_csv, write_raw_csv, RentalRow, CSV_HEADER};
    use chrono::NaiveDate;

    #[test]
    fn test_load_derives_calendar_columns() -> Result<(), Box<dyn std::error::Error>> {
        // 2011-01-03 was a Monday, 2012-12-30 a Sunday
        let file = write_csv(&[
            RentalRow::new("2011-01-03", 17, 500, 1),
            RentalRow::new("2012-12-30", 8, 100, 2),
        ])?;

        let table = RentalDataLoader::load(file.path())?;
        let df = table.frame();

        assert_eq!(df.height(), 2);
        assert_eq!(df.column(COL_DATE)?.dtype(), &DataType::Date);

        let hours: Vec<Option<i32>> = df.column(COL_HOUR)?.i32()?.into_iter().collect();
        let months: Vec<Option<i32>> = df.column(COL_MONTH)?.i32()?.into_iter().collect();
        let weekdays: Vec<Option<i32>> = df.column(COL_DAY_OF_WEEK)?.i32()?.into_iter().collect();
        assert_eq!(hours, [Some(17), Some(8)]);
        assert_eq!(months, [Some(1), Some(12)]);
        assert_eq!(weekdays, [Some(0), Some(6)]);

        Ok(())
    }

    #[test]
    fn test_load_derives_weather_labels() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            RentalRow::new("2011-01-01", 0, 10, 1),
            RentalRow::new("2011-01-01", 1, 10, 2),
            RentalRow::new("2011-01-01", 2, 10, 3),
            RentalRow::new("2011-01-01", 3, 10, 4),
            RentalRow::new("2011-01-01", 4, 10, 7),
        ])?;

        let table = RentalDataLoader::load(file.path())?;
        let labels: Vec<Option<String>> = table
            .frame()
            .column(COL_WEATHER_LABEL)?
            .str()?
            .into_iter()
            .map(|l| l.map(str::to_string))
            .collect();

        assert_eq!(
            labels,
            [
                Some("Cerah".to_string()),
                Some("Berawan".to_string()),
                Some("Hujan Ringan".to_string()),
                Some("Hujan Lebat".to_string()),
                None,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_load_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            RentalRow::new("2011-03-14", 9, 120, 1),
            RentalRow::new("2011-07-04", 18, 640, 3),
            RentalRow::new("2011-11-25", 23, 35, 2),
        ])?;

        let first = RentalDataLoader::load(file.path())?;
        let second = RentalDataLoader::load(file.path())?;

        assert!(first.frame().equals_missing(second.frame()));
        assert_eq!(
            first.frame().column(COL_WEATHER_LABEL)?.null_count(),
            second.frame().column(COL_WEATHER_LABEL)?.null_count()
        );
        Ok(())
    }

    #[test]
    fn test_load_reports_date_range() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            RentalRow::new("2011-05-02", 9, 120, 1),
            RentalRow::new("2011-01-01", 18, 640, 1),
        ])?;
        let table = RentalDataLoader::load(file.path())?;

        assert_eq!(
            table.date_range()?,
            Some((
                NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2011, 5, 2).unwrap()
            ))
        );
        Ok(())
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = RentalDataLoader::load(&dir.path().join("dataset_all.csv"));
        assert!(matches!(result, Err(DataLoadError::SourceMetadata(..))));
    }

    #[test]
    fn test_missing_column_fails() -> Result<(), Box<dyn std::error::Error>> {
        let header_without_weather = CSV_HEADER.replace(",weathersit_day", "");
        let file = write_raw_csv(&format!(
            "{}\n2011-01-01,0,16,985,0.24,0.81,0.0,0.34,0.81,0.16\n",
            header_without_weather
        ))?;

        match RentalDataLoader::load(file.path()) {
            Err(DataLoadError::MissingColumn { column, .. }) => {
                assert_eq!(column, COL_WEATHER_CODE)
            }
            other => panic!("Expected MissingColumn, got {:?}", other.map(|t| t.height())),
        }
        Ok(())
    }

    #[test]
    fn test_unparseable_date_fails() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            RentalRow::new("2011-01-01", 0, 16, 1),
            RentalRow::new("01/02/2011", 1, 40, 1),
        ])?;
        let result = RentalDataLoader::load(file.path());
        assert!(matches!(result, Err(DataLoadError::Derivation { .. })));
        Ok(())
    }

    #[test]
    fn test_hour_out_of_range_fails() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[RentalRow::new("2011-01-01", 24, 16, 1)])?;
        match RentalDataLoader::load(file.path()) {
            Err(DataLoadError::InvalidColumn { column, .. }) => assert_eq!(column, COL_HR),
            other => panic!("Expected InvalidColumn, got {:?}", other.map(|t| t.height())),
        }
        Ok(())
    }

    #[test]
    fn test_missing_date_fails() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_raw_csv(&format!(
            "{}\n2011-01-01,0,16,985,1,0.24,0.81,0.0,0.34,0.81,0.16\n,1,40,985,1,0.22,0.80,0.0,0.34,0.81,0.16\n",
            CSV_HEADER
        ))?;
        match RentalDataLoader::load(file.path()) {
            Err(DataLoadError::InvalidColumn { column, .. }) => assert_eq!(column, COL_DATE),
            other => panic!("Expected InvalidColumn, got {:?}", other.map(|t| t.height())),
        }
        Ok(())
    }

    #[test]
    fn test_missing_hour_fails() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_raw_csv(&format!(
            "{}\n2011-01-01,0,16,985,1,0.24,0.81,0.0,0.34,0.81,0.16\n2011-01-01,,40,985,1,0.22,0.80,0.0,0.34,0.81,0.16\n",
            CSV_HEADER
        ))?;
        match RentalDataLoader::load(file.path()) {
            Err(DataLoadError::InvalidColumn { column, .. }) => assert_eq!(column, COL_HR),
            other => panic!("Expected InvalidColumn, got {:?}", other.map(|t| t.height())),
        }
        Ok(())
    }

    #[test]
    fn test_header_only_csv_loads_empty_table() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_raw_csv(&format!("{}\n", CSV_HEADER))?;

        let table = RentalDataLoader::load(file.path())?;
        assert!(table.is_empty());
        assert_eq!(table.frame().column(COL_DATE)?.dtype(), &DataType::Date);
        assert_eq!(table.frame().column(COL_WEATHER_CODE)?.dtype(), &DataType::Int64);
        assert_eq!(table.frame().column(COL_TEMP_HOUR)?.dtype(), &DataType::Float64);

        let report = Report::from_table(file.path(), &table)?;
        assert_eq!(report.period, None);
        assert!(report.hourly.is_empty());
        assert_eq!(report.hourly.peak(), None);
        assert!(report.weather.distributions.is_empty());
        assert!(report.weather.means.is_empty());
        assert_eq!(report.daily_metrics.sum, 0.0);
        assert_eq!(report.daily_metrics.mean, None);
        assert!(report.hourly_correlation.values[0][1].is_nan());
        assert_eq!(report.description.rows, 0);
        Ok(())
    }
}
