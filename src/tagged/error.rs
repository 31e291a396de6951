//! Errors raised while turning a filesystem path into a `TaggedPath`

use thiserror::Error;

/// Path decomposition errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path has no parent folder or no leaf name (e.g. `/`, `..`, an empty
    /// string), or its leaf name is not valid UTF-8
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl PathError {
    #[must_use]
    pub fn invalid(path: &std::path::Path, reason: &str) -> Self {
        Self::InvalidPath {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}
