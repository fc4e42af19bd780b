//! Error types for ReportDeck

use thiserror::Error;

/// Main error type for ReportDeck operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// No clipboard backend could take the text
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// Table row payload was not a JSON array of rows
    #[error("Invalid table data: {0}")]
    InvalidTableData(String),

    /// Breadcrumb template failed to render
    #[error("Template error: {0}")]
    Template(String),

    /// Report dataset could not be parsed
    #[error("Invalid report data: {0}")]
    InvalidReportData(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ReportError
pub type ReportResult<T> = Result<T, ReportError>;
