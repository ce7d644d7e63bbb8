// ---------------------------------------------------------------------------
// ExportError: error type for CSV export/import
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while exporting or importing lane groups.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error (file not found, permission denied, disk full, etc.)
    Io(std::io::Error),
    /// The CSV writer or reader rejected the data (malformed row, bad quoting).
    Csv(csv::Error),
    /// The produced bytes were not valid UTF-8.
    Encoding(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {e}"),
            ExportError::Csv(e) => write!(f, "CSV error: {e}"),
            ExportError::Encoding(msg) => write!(f, "Encoding error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Csv(e) => Some(e),
            ExportError::Encoding(_) => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e)
    }
}
