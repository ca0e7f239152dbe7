// Store error types
// One variant per defined error outcome, plus a catch-all for filesystem failures

use thiserror::Error;

/// Errors surfaced by note store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No note file exists under the requested name.
    #[error("note not found")]
    NotFound,

    /// A note with the requested name already exists.
    #[error("note already exists")]
    Conflict,

    /// The name is empty or not a single plain path component.
    #[error("invalid note name: {0:?}")]
    InvalidName(String),

    /// Unexpected filesystem failure (permissions, disk full, unreadable directory).
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
}
