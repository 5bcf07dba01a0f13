//! Error types for workbook loading.

use thiserror::Error;

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors raised while reading a tracker workbook
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open workbook {path}: {message}")]
    WorkbookOpen { path: String, message: String },

    #[error("Workbook has no worksheets: {0}")]
    NoWorksheet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel error: {0}")]
    Calamine(String),
}

impl From<calamine::XlsxError> for LoadError {
    fn from(err: calamine::XlsxError) -> Self {
        Self::Calamine(err.to_string())
    }
}
