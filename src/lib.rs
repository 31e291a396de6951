//! Tagdir - tags stored in file names
//!
//! Tags live inside the name of each file or folder, as a space-separated
//! list between square brackets: `beach[2019 family].jpg`. No database is
//! involved; renaming a file is how its tags change.
//!
//! - [`tagged`]: parsing and rebuilding tagged names
//! - [`filter`]: tag filter expressions (`foo -bar`, `:untagged:`)
//! - [`sort`]: sort methods for listings
//! - [`query`]: filtered, sorted listings of one folder
//! - [`mutate`]: renaming entries to change their tags, one or folder-wide

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod filter;
pub mod mutate;
pub mod output;
pub mod query;
pub mod sort;
pub mod tagged;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TagdirError {
    /// A path could not be read as a tagged name
    #[error("Path error: {0}")]
    PathError(#[from] tagged::PathError),
    /// A folder could not be listed
    #[error("Query error: {0}")]
    QueryError(#[from] query::QueryError),
    /// A rename failed
    #[error("Rename error: {0}")]
    MutationError(#[from] mutate::MutationError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Some entries of a multi-entry operation could not be renamed
    #[error("{0} rename(s) failed")]
    PartialFailure(usize),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
