//! HTML dashboard rendering of a [`Report`](crate::Report).

mod charts;
mod html;

pub use html::render_html;

use crate::error::AnalyticsError;
use crate::report::generator::Report;
use log::info;
use std::fs;
use std::path::Path;

/// Renders `report` and writes the page to `path`, replacing any existing file.
pub fn write_html(report: &Report, path: &Path) -> Result<(), AnalyticsError> {
    let page = render_html(report)?;
    fs::write(path, page).map_err(|e| AnalyticsError::ReportWrite(path.to_path_buf(), e))?;
    info!("Wrote dashboard to {:?}", path);
    Ok(())
}
