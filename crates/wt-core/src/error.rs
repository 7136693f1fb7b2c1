//! Error types used throughout the crate.

use thiserror::Error;

/// Result type for tracker core operations.
pub type WtResult<T> = Result<T, WtError>;

/// Errors that can occur in the tracker core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WtError {
    /// A string did not name a known item category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
