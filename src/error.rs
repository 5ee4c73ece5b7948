use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool loads catalogs, normalizes rows, or writes a parts list.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when a CSV file cannot be read, decoded, or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when the JSON configuration file cannot be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a color or part lookup finds no match in any table.
    #[error("no {kind} matching '{key}' in catalog")]
    CatalogGap { kind: &'static str, key: String },

    /// Raised when a row lacks required structure.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Raised when a reference table does not follow the expected layout.
    #[error("malformed catalog {path}: {message}")]
    MalformedCatalog { path: PathBuf, message: String },

    /// Raised in strict mode when no part number candidate is known.
    #[error("could not resolve '{product}' (fell back to '{fallback}')")]
    UnresolvedPart { product: String, fallback: String },

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl ToolError {
    pub(crate) fn gap(kind: &'static str, key: impl ToString) -> Self {
        ToolError::CatalogGap {
            kind,
            key: key.to_string(),
        }
    }
}
