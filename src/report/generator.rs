//! This module provides the main entry point of the crate: [`ReportGenerator`] loads the
//! rental dataset (through its own [`FrameCache`]) and runs every dashboard query against it.

use crate::analysis::correlation::CorrelationMatrix;
use crate::analysis::summary::{DatasetDescription, SummaryMetrics};
use crate::analysis::temporal::TemporalAverages;
use crate::analysis::weather::WeatherEffect;
use crate::error::AnalyticsError;
use crate::rental_data::frame_cache::FrameCache;
use crate::report::narrative::{Recommendation, BEST_TIME, CONCLUSIONS, INFLUENCING_FACTORS};
use crate::types::grain::Grain;
use crate::types::rental_table::RentalTable;
use crate::types::temporal_key::TemporalKey;
use bon::bon;
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Location of the dataset when none is configured.
pub const DEFAULT_DATA_PATH: &str = "dataset_all.csv";

/// Everything the dashboard shows, computed from one load of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub source: PathBuf,
    /// First and last date in the data.
    pub period: Option<(NaiveDate, NaiveDate)>,
    pub description: DatasetDescription,
    pub hourly: TemporalAverages,
    pub daily: TemporalAverages,
    pub monthly: TemporalAverages,
    pub weather: WeatherEffect,
    pub hourly_correlation: CorrelationMatrix,
    pub hourly_metrics: SummaryMetrics,
    pub daily_correlation: CorrelationMatrix,
    pub daily_metrics: SummaryMetrics,
    pub recommendations: [Recommendation; 2],
    pub conclusions: Recommendation,
}

impl Report {
    /// Builds the report from an already loaded table.
    pub fn from_table(source: &Path, table: &RentalTable) -> Result<Self, AnalyticsError> {
        Ok(Self {
            source: source.to_path_buf(),
            period: table.date_range()?,
            description: DatasetDescription::compute(table)?,
            hourly: TemporalAverages::compute(table, TemporalKey::Hour)?,
            daily: TemporalAverages::compute(table, TemporalKey::DayOfWeek)?,
            monthly: TemporalAverages::compute(table, TemporalKey::Month)?,
            weather: WeatherEffect::compute(table)?,
            hourly_correlation: CorrelationMatrix::for_grain(table, Grain::Hourly)?,
            hourly_metrics: SummaryMetrics::for_grain(table, Grain::Hourly)?,
            daily_correlation: CorrelationMatrix::for_grain(table, Grain::Daily)?,
            daily_metrics: SummaryMetrics::for_grain(table, Grain::Daily)?,
            recommendations: [BEST_TIME, INFLUENCING_FACTORS],
            conclusions: CONCLUSIONS,
        })
    }

    /// The averages for one temporal dimension.
    pub fn temporal(&self, key: TemporalKey) -> &TemporalAverages {
        match key {
            TemporalKey::Hour => &self.hourly,
            TemporalKey::DayOfWeek => &self.daily,
            TemporalKey::Month => &self.monthly,
        }
    }

    /// Annotation under the hourly chart, e.g.
    /// `"Jam tersibuk adalah pukul 17:00 dengan rata-rata 462 penyewaan"`.
    pub fn peak_hour_note(&self) -> Option<String> {
        self.hourly.peak().map(|(hour, mean)| {
            format!(
                "Jam tersibuk adalah pukul {}:00 dengan rata-rata {:.0} penyewaan",
                hour, mean
            )
        })
    }

    /// The report as pretty-printed JSON. Undefined statistics serialize as `null`.
    pub fn to_json(&self) -> Result<String, AnalyticsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Produces dashboard [`Report`]s for a dataset file.
///
/// The generator owns the cache of loaded tables, so repeated calls to
/// [`ReportGenerator::generate`] only re-read the file after it has been modified.
///
/// # Examples
///
/// ```no_run
/// use bike_rent_analytics::ReportGenerator;
///
/// # fn main() -> Result<(), bike_rent_analytics::AnalyticsError> {
/// let generator = ReportGenerator::builder()
///     .data_path("data/dataset_all.csv")
///     .build();
/// let report = generator.generate()?;
/// if let Some(note) = report.peak_hour_note() {
///     println!("{}", note);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ReportGenerator {
    data_path: PathBuf,
    cache: FrameCache,
}

#[bon]
impl ReportGenerator {
    /// Creates a generator for the dataset at `data_path` (default: `dataset_all.csv`
    /// relative to the working directory).
    #[builder]
    pub fn new(
        #[builder(into, default = PathBuf::from(DEFAULT_DATA_PATH))] data_path: PathBuf,
    ) -> Self {
        Self {
            data_path,
            cache: FrameCache::new(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// The loaded table, served from the cache while the file is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::DataLoad`] when the file is missing or cannot be parsed.
    pub fn table(&self) -> Result<Arc<RentalTable>, AnalyticsError> {
        Ok(self.cache.get_or_load(&self.data_path)?)
    }

    /// Loads the dataset (or reuses the cached table) and runs every dashboard query.
    ///
    /// # Errors
    ///
    /// Any failure aborts the whole report; there is no partial result.
    pub fn generate(&self) -> Result<Report, AnalyticsError> {
        let started = Instant::now();
        let table = self.table()?;
        let report = Report::from_table(&self.data_path, &table)?;
        info!(
            "Generated report for {:?} ({} rows) in {:?}",
            self.data_path,
            table.height(),
            started.elapsed()
        );
        Ok(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{write_csv, RentalRow};
    use crate::types::weather_condition::{WeatherCondition, WeatherGroup};
    use crate::DataLoadError;

    #[test]
    fn test_two_row_report() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            RentalRow::new("2011-01-03", 17, 500, 1),
            RentalRow::new("2011-01-03", 8, 100, 2),
        ])?;
        let generator = ReportGenerator::builder().data_path(file.path()).build();

        let report = generator.generate()?;
        assert_eq!(report.hourly.averages.get(&17), Some(&500.0));
        assert_eq!(report.hourly.averages.get(&8), Some(&100.0));
        assert_eq!(report.hourly.peak(), Some((17, 500.0)));
        assert_eq!(
            report.peak_hour_note().as_deref(),
            Some("Jam tersibuk adalah pukul 17:00 dengan rata-rata 500 penyewaan")
        );

        let groups: Vec<WeatherGroup> = report.weather.distributions.iter().map(|d| d.group).collect();
        assert_eq!(
            groups,
            [
                WeatherGroup::Known(WeatherCondition::Clear),
                WeatherGroup::Known(WeatherCondition::Cloudy)
            ]
        );
        assert_eq!(groups[0].label(), "Cerah");
        assert_eq!(groups[1].label(), "Berawan");

        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.monthly.len(), 1);
        assert_eq!(report.hourly_metrics.sum, 600.0);
        assert_eq!(report.daily_metrics.max, Some(5000.0));
        Ok(())
    }

    #[test]
    fn test_generate_reuses_cached_table() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            RentalRow::new("2011-01-03", 17, 500, 1),
            RentalRow::new("2011-01-04", 8, 100, 3),
        ])?;
        let generator = ReportGenerator::builder().data_path(file.path()).build();

        let first_table = generator.table()?;
        let first = generator.generate()?;
        let second = generator.generate()?;

        assert!(Arc::ptr_eq(&first_table, &generator.table()?));
        assert_eq!(first.hourly, second.hourly);
        assert_eq!(first.weather, second.weather);
        Ok(())
    }

    #[test]
    fn test_missing_dataset_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ReportGenerator::builder()
            .data_path(dir.path().join("dataset_all.csv"))
            .build();

        let result = generator.generate();
        assert!(matches!(
            result,
            Err(AnalyticsError::DataLoad(DataLoadError::SourceMetadata(..)))
        ));
    }

    #[test]
    fn test_default_data_path() {
        let generator = ReportGenerator::default();
        assert_eq!(generator.data_path(), Path::new(DEFAULT_DATA_PATH));
    }

    #[test]
    fn test_report_serializes_to_json() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            RentalRow::new("2011-01-03", 17, 500, 1),
            RentalRow::new("2011-01-03", 8, 100, 2),
        ])?;
        let report = ReportGenerator::builder()
            .data_path(file.path())
            .build()
            .generate()?;

        let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;
        assert_eq!(json["hourly"]["averages"]["17"], 500.0);
        assert_eq!(json["period"][0], "2011-01-03");
        assert_eq!(json["conclusions"]["title"], "Kesimpulan Utama");
        // Correlations are undefined for a single day and serialize as null
        assert!(json["daily_correlation"]["values"][0][0].is_null());
        Ok(())
    }
}
