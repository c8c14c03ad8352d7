//! CSV export of the drive table, reproducing the dashboard's download
//! format byte for byte.

use std::fs;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};

use super::domain::{Drive, EligibilityCriteria};

/// File name the export is always written under.
pub const EXPORT_FILE_NAME: &str = "drives_export.csv";

const HEADER: [&str; 7] = [
    "Company",
    "Position",
    "Applications",
    "Deadline",
    "Package",
    "Status",
    "Eligibility Criteria",
];

/// Errors surfaced while rendering or writing the export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to render CSV")]
    Csv(#[from] csv::Error),
    #[error("export rendered invalid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render `drives` as the seven-column CSV, one row per drive in the order
/// given, header first.
///
/// Fields are never quoted. A value that itself contains a comma will
/// shift the columns of its row; callers that care must sanitize
/// beforehand.
pub fn drives_to_csv(drives: &[&Drive]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for drive in drives {
        writer.write_record([
            drive.company.as_str(),
            drive.position.as_str(),
            &drive.applications.to_string(),
            &drive.deadline.to_string(),
            drive.package.as_str(),
            drive.status.label(),
            &eligibility_summary(&drive.eligibility),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Csv(err.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Write the export into `dir` as [`EXPORT_FILE_NAME`], replacing any
/// previous export, and return the full path.
pub fn write_drives_csv(dir: &Path, drives: &[&Drive]) -> Result<PathBuf, ExportError> {
    let rendered = drives_to_csv(drives)?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, rendered).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// One-line pipe-delimited summary used in the export's last column, e.g.
/// `CGPA: 7.5+ | Backlogs: 0 | Branches: CSE/IT | Year: 2025`. Free-form
/// additional requirements are appended as a final segment when present.
pub fn eligibility_summary(criteria: &EligibilityCriteria) -> String {
    let branches = if criteria.branches.is_empty() {
        "All".to_string()
    } else {
        criteria
            .branches
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("/")
    };
    let mut summary = format!(
        "CGPA: {}+ | Backlogs: {} | Branches: {} | Year: {}",
        criteria.min_cgpa, criteria.max_backlogs, branches, criteria.batch_year
    );
    if !criteria.additional_requirements.trim().is_empty() {
        summary.push_str(" | ");
        summary.push_str(&criteria.additional_requirements);
    }
    summary
}
