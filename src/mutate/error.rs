//! Errors raised while renaming entries on disk

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::query::QueryError;

/// Longest file name accepted by common filesystems, measured by [`name_length`]
pub const MAX_NAME_LEN: usize = 255;

/// Length of `name` in the units the platform limits: UTF-8 bytes on Unix
/// filesystems, UTF-16 code units on NTFS.
#[must_use]
pub fn name_length(name: &str) -> usize {
    #[cfg(windows)]
    {
        name.encode_utf16().count()
    }
    #[cfg(not(windows))]
    {
        name.len()
    }
}

/// Why a single rename did not happen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameFailure {
    #[error("destination already exists")]
    TargetExists,
    #[error("source does not exist")]
    SourceMissing,
    #[error("new name is too long ({0}, the limit is {MAX_NAME_LEN})")]
    NameTooLong(usize),
    #[error("source is in use by another process")]
    Busy,
    #[error("permission denied")]
    PermissionDenied,
    #[error("{0}")]
    Io(String),
}

impl RenameFailure {
    /// Whether retrying later may succeed (the file is held open elsewhere)
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Busy)
    }

    #[must_use]
    pub fn from_io(error: &io::Error) -> Self {
        if is_sharing_violation(error) {
            return Self::Busy;
        }
        match error.kind() {
            io::ErrorKind::NotFound => Self::SourceMissing,
            io::ErrorKind::AlreadyExists | io::ErrorKind::DirectoryNotEmpty => Self::TargetExists,
            io::ErrorKind::ResourceBusy => Self::Busy,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(error.to_string()),
        }
    }
}

#[cfg(windows)]
fn is_sharing_violation(error: &io::Error) -> bool {
    // ERROR_SHARING_VIOLATION, ERROR_LOCK_VIOLATION
    matches!(error.raw_os_error(), Some(32 | 33))
}

#[cfg(not(windows))]
const fn is_sharing_violation(_error: &io::Error) -> bool {
    false
}

/// Tag mutation errors
#[derive(Debug, Error)]
pub enum MutationError {
    /// One rename attempt failed; carries both paths for diagnostics
    #[error("Failed to rename {} to {}: {reason}", from.display(), to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        reason: RenameFailure,
    },

    /// The folder could not be listed, or an entry in it could not be read
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl MutationError {
    /// Whether retrying the same operation later may succeed
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::RenameFailed { reason, .. } => reason.is_transient(),
            Self::Query(_) => false,
        }
    }
}
