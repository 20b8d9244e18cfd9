//! Renders the bike rental dashboard for `dataset_all.csv` in the working directory.
//!
//! Set `RUST_LOG=info` (or debug) to follow the pipeline.

use bike_rent_analytics::render::write_html;
use bike_rent_analytics::{AnalyticsError, ReportGenerator};
use log::{error, info};
use std::path::Path;

const OUTPUT_PATH: &str = "dashboard.html";

fn main() -> Result<(), AnalyticsError> {
    env_logger::init();

    let generator = ReportGenerator::default();
    info!("Loading rentals from {:?}", generator.data_path());

    let report = generator.generate().inspect_err(|e| error!("Failed to build report: {}", e))?;
    if let Some(note) = report.peak_hour_note() {
        info!("{}", note);
    }

    write_html(&report, Path::new(OUTPUT_PATH))
        .inspect_err(|e| error!("Failed to write dashboard: {}", e))?;
    println!("Dashboard written to {}", OUTPUT_PATH);
    Ok(())
}
