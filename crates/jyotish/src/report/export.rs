//! Plain-text and JSON rendering of reports, and saving them to disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::report::types::AstrologyReport;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: std::io::Error },
    #[error("Failed to write report to {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    #[default]
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{other}' (expected text or json)")),
        }
    }
}

pub fn render_text(report: &AstrologyReport) -> String {
    let birth = &report.birth_data;
    let mut out = format!(
        "Astrological Report: {}\nGenerated on {}\nBirth Details: {} {}, Location: {}\n\nSummary\n{}\n",
        report.report_type.title(),
        report.generated_at.format("%Y-%m-%d %H:%M:%S"),
        birth.date.format("%Y-%m-%d"),
        birth.time,
        birth.place,
        report.summary,
    );

    if !report.recommendations.is_empty() {
        out.push_str("\nRecommendations\n");
        for item in &report.recommendations {
            out.push_str(&format!("- {item}\n"));
        }
    }
    out
}

pub fn render_json(report: &AstrologyReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn render(report: &AstrologyReport, format: ReportFormat) -> Result<String, ExportError> {
    Ok(match format {
        ReportFormat::Text => render_text(report),
        ReportFormat::Json => render_json(report)?,
    })
}

/// `<report type>_<YYYYMMDDHHMMSS>_<id suffix>.<ext>`, lowercase.
///
/// The id suffix keeps reports saved within the same second apart.
pub fn report_file_name(report: &AstrologyReport, format: ReportFormat) -> String {
    let suffix = report.id.rsplit('_').next().unwrap_or_default();
    format!(
        "{}_{}_{}.{}",
        report.report_type.as_str().to_lowercase(),
        report.generated_at.format("%Y%m%d%H%M%S"),
        suffix,
        format.extension()
    )
}

/// Write the rendered report into `dir`, creating it if needed.
pub fn save_report(report: &AstrologyReport, dir: &Path, format: ReportFormat) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(report_file_name(report, format));
    let body = render(report, format)?;
    fs::write(&path, body).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("Saved {} report to {}", report.report_type, path.display());
    Ok(path)
}
