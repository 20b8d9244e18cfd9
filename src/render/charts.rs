//! Plotly charts for the dashboard, built with `plotlars` from small frames of report values.

use crate::analysis::correlation::CorrelationMatrix;
use crate::analysis::temporal::TemporalAverages;
use crate::analysis::weather::WeatherEffect;
use crate::error::AnalyticsError;
use crate::types::temporal_key::TemporalKey;
use plotlars::{BarPlot, BoxPlot, HeatMap, LinePlot, Plot, Rgb, Text};
use polars::prelude::*;

const COUNT_AXIS: &str = "Rata-rata Penyewaan";
const ACCENT: Rgb = Rgb(31, 119, 180);

/// Line chart for hours, bar chart for the categorical keys. Returns an HTML fragment.
pub fn temporal_chart(averages: &TemporalAverages, div_id: &str) -> Result<String, AnalyticsError> {
    let title = format!("Rata-rata Penyewaan {}", averages.key.title());
    match averages.key {
        TemporalKey::Hour => {
            let hours: Vec<i32> = averages.averages.keys().copied().collect();
            let means: Vec<f64> = averages.averages.values().copied().collect();
            let data = df!("hour" => hours, "mean" => means)?;
            Ok(LinePlot::builder()
                .data(&data)
                .x("hour")
                .y("mean")
                .color(ACCENT)
                .with_shape(true)
                .plot_title(Text::from(title.as_str()))
                .x_title("Jam")
                .y_title(COUNT_AXIS)
                .build()
                .to_inline_html(Some(div_id)))
        }
        TemporalKey::DayOfWeek | TemporalKey::Month => {
            let (labels, means): (Vec<String>, Vec<f64>) = averages.labelled().into_iter().unzip();
            let data = df!("label" => labels, "mean" => means)?;
            let x_title = match averages.key {
                TemporalKey::Month => "Bulan",
                _ => "Hari",
            };
            Ok(BarPlot::builder()
                .data(&data)
                .labels("label")
                .values("mean")
                .color(ACCENT)
                .plot_title(Text::from(title.as_str()))
                .x_title(x_title)
                .y_title(COUNT_AXIS)
                .build()
                .to_inline_html(Some(div_id)))
        }
    }
}

/// Distribution of daily rentals per weather group.
pub fn weather_box_chart(weather: &WeatherEffect, div_id: &str) -> Result<String, AnalyticsError> {
    let mut labels = Vec::new();
    let mut values = Vec::new();
    for distribution in &weather.distributions {
        labels.extend(std::iter::repeat(distribution.group.label()).take(distribution.values.len()));
        values.extend_from_slice(&distribution.values);
    }
    let data = df!("weather" => labels, "cnt" => values)?;
    Ok(BoxPlot::builder()
        .data(&data)
        .labels("weather")
        .values("cnt")
        .plot_title(Text::from("Distribusi Penyewaan Berdasarkan Cuaca"))
        .x_title("Kondisi Cuaca")
        .y_title("Jumlah Penyewaan")
        .build()
        .to_inline_html(Some(div_id)))
}

/// Mean daily rentals per weather group, highest first.
pub fn weather_mean_chart(weather: &WeatherEffect, div_id: &str) -> Result<String, AnalyticsError> {
    let labels: Vec<&str> = weather.means.iter().map(|(group, _)| group.label()).collect();
    let means: Vec<f64> = weather.means.iter().map(|(_, mean)| *mean).collect();
    let data = df!("weather" => labels, "mean" => means)?;
    Ok(BarPlot::builder()
        .data(&data)
        .labels("weather")
        .values("mean")
        .color(ACCENT)
        .plot_title(Text::from("Rata-rata Penyewaan per Kondisi Cuaca"))
        .x_title("Kondisi Cuaca")
        .y_title(COUNT_AXIS)
        .build()
        .to_inline_html(Some(div_id)))
}

/// Heatmap of a correlation matrix. Undefined entries are left blank.
pub fn correlation_heatmap(
    matrix: &CorrelationMatrix,
    title: &str,
    div_id: &str,
) -> Result<String, AnalyticsError> {
    let cells = matrix.cells();
    let x: Vec<&str> = cells.iter().map(|(_, column, _)| *column).collect();
    let y: Vec<&str> = cells.iter().map(|(row, _, _)| *row).collect();
    let z: Vec<Option<f64>> = cells
        .iter()
        .map(|(_, _, value)| (!value.is_nan()).then_some(*value))
        .collect();
    let data = df!("x" => x, "y" => y, "z" => z)?;
    Ok(HeatMap::builder()
        .data(&data)
        .x("x")
        .y("y")
        .z("z")
        .plot_title(Text::from(title))
        .build()
        .to_inline_html(Some(div_id)))
}
