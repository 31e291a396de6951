//! Errors raised while listing a folder

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Folder listing errors
#[derive(Debug, Error)]
pub enum QueryError {
    /// The folder does not exist or is not a folder
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The folder, or one entry in it, cannot be accessed
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// An entry could not be turned into a tagged path
    #[error("Skipped entry {}: {reason}", path.display())]
    UnreadableEntry { path: PathBuf, reason: String },

    /// Any other I/O failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl QueryError {
    /// Classify an I/O error raised for `path`
    #[must_use]
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
                Self::DirectoryNotFound(path.to_path_buf())
            }
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}
