//! Order report rendering
//!
//! - [`excel`] - one row per order, `.xlsx`
//! - [`pdf`] - A4 summary report

pub mod excel;
pub mod pdf;

use chrono::DateTime;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Export error types
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Excel generation failed: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        tracing::error!(error = %err, "Export failed");
        AppError::with_message(ErrorCode::ExportFailed, err.to_string())
    }
}

/// `YYYY-MM-DD HH:MM:SS` (UTC) for a millisecond timestamp
pub(crate) fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// First `max` characters of `s`
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
