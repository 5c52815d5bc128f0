//! Export of extracted article records
//!
//! This module holds the record shape shared by all exports and the
//! writers for the three supported formats (JSON, CSV, XLSX).

mod exporter;
mod record;

pub use exporter::{export_records, ExportFormat};
pub use record::ArticleRecord;

use thiserror::Error;

/// Errors that can occur while writing export files
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet encoding failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
