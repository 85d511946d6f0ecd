//! Output module for crawl reports
//!
//! This module handles:
//! - Assembling a `CrawlReport` from a finished crawl
//! - Rendering it as a terminal table, markdown, or JSON
//! - Writing the rendered report to a file or stdout

mod markdown;
mod report;
mod table;

pub use markdown::format_markdown_report;
pub use report::{CrawlReport, OutputError, OutputResult};
pub use table::format_table_report;

use crate::config::OutputFormat;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Renders a report in the requested format
pub fn render_report(report: &CrawlReport, format: OutputFormat) -> OutputResult<String> {
    match format {
        OutputFormat::Table => Ok(format_table_report(report)),
        OutputFormat::Markdown => Ok(format_markdown_report(report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Renders a report and writes it to `path`, or to stdout when `path` is None
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to render or write the report
pub fn write_report(
    report: &CrawlReport,
    format: OutputFormat,
    path: Option<&Path>,
) -> OutputResult<()> {
    let rendered = render_report(report, format)?;

    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(rendered.as_bytes())?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
        }
    }

    Ok(())
}
