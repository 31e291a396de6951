//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for tagdir using the `clap` crate.
//!
//! # Commands
//!
//! - **ls**: list a folder, filtered and sorted by tag
//! - **tags**: list the tags used in a folder
//! - **set**: replace, extend or trim the tags of one file or folder
//! - **normalize**: sort and deduplicate tags in place
//! - **replace-tag** / **delete-tag**: folder-wide tag edits
//! - **config**: get and set configuration values
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use tagdir::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["tagdir", "ls", "photos", "-f", "beach -blurry"]);
//! assert!(matches!(cli.command, Commands::Ls { .. }));
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::sort::SortMethod;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., default_sort=comic)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Folder and filter arguments shared by listing commands
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Folder to list (defaults to the current folder)
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Filter expression: `foo` requires, `-foo` forbids, `:untagged:` selects untagged
    #[arg(short = 'f', long = "filter", value_name = "FILTER", allow_hyphen_values = true)]
    pub filter: Option<String>,
}

/// Arguments shared by folder-wide tag edits
#[derive(Parser, Debug, Clone)]
pub struct BulkArgs {
    /// Folder whose entries are renamed (defaults to the current folder)
    #[arg(short = 'd', long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Show what would be renamed without renaming anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tagdir")]
#[command(about = "Tags stored in file names", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log every listing and rename to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List a folder, folders first
    #[command(visible_alias = "list")]
    Ls {
        #[command(flatten)]
        list_args: ListArgs,

        /// Sort method (overrides config)
        #[arg(short = 's', long = "sort", value_enum)]
        sort: Option<SortMethod>,

        /// Reverse the order
        #[arg(long = "desc")]
        desc: bool,

        /// Print the listing as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// List the tags used by the matching entries of a folder
    Tags {
        #[command(flatten)]
        list_args: ListArgs,
    },

    /// Set the tags of a file or folder
    #[command(visible_alias = "t")]
    Set {
        /// File or folder to rename
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// New tags (replace the current ones unless --add or --remove is given)
        #[arg(value_name = "TAGS")]
        tags: Vec<String>,

        /// Append the tags to the current ones
        #[arg(short = 'a', long = "add", conflicts_with = "remove")]
        add: bool,

        /// Remove the tags from the current ones
        #[arg(short = 'r', long = "remove", conflicts_with = "add")]
        remove: bool,
    },

    /// Sort and deduplicate tags, moving them before the extension
    #[command(visible_alias = "n")]
    Normalize {
        /// Files or folders to normalize
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
    },

    /// Rename a tag on every entry of a folder
    #[command(name = "replace-tag", visible_alias = "mv")]
    ReplaceTag {
        /// Tag to replace
        old_tag: String,

        /// Tag to put in its place
        new_tag: String,

        #[command(flatten)]
        bulk_args: BulkArgs,
    },

    /// Remove a tag from every entry of a folder
    #[command(name = "delete-tag", visible_alias = "rm")]
    DeleteTag {
        /// Tag to remove
        tag: String,

        #[command(flatten)]
        bulk_args: BulkArgs,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// How `set` combines the given tags with the current ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetMode {
    Replace,
    Add,
    Remove,
}

impl SetMode {
    #[must_use]
    pub const fn from_flags(add: bool, remove: bool) -> Self {
        if add {
            Self::Add
        } else if remove {
            Self::Remove
        } else {
            Self::Replace
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
