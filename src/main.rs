//! Tagdir CLI application entry point
//!
//! Command-line front end for tags stored in file names. Every command goes
//! through the library's public API.
//!
//! # Usage
//!
//! ```bash
//! # List the current folder, folders first
//! tagdir ls
//!
//! # Only entries tagged beach but not blurry, by date, newest first
//! tagdir ls photos -f "beach -blurry" -s date --desc
//!
//! # Entries without tags
//! tagdir ls -f :untagged:
//!
//! # Replace, extend or trim the tags of one entry
//! tagdir set beach.jpg 2019 family
//! tagdir set beach[2019 family].jpg --add sunset
//! tagdir set beach[2019 family sunset].jpg --remove family
//!
//! # Folder-wide edits
//! tagdir replace-tag holiday vacation -d photos --dry-run
//! tagdir delete-tag tmp -y
//!
//! # Quiet mode (only output results)
//! tagdir -q tags photos
//! ```
//!
//! # Configuration
//!
//! Defaults live in the user's config directory
//! (`~/.config/tagdir/config.toml` on Linux). Logging goes to stderr and is
//! controlled by `TAGDIR_LOG` (default `warn`) or `--verbose`.

use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tagdir::{
    TagdirError,
    cli::{Cli, Commands, SetMode},
    commands::{self, retry::RetryPolicy},
    config::TagdirConfig,
};

type Result<T> = std::result::Result<T, TagdirError>;

/// Environment variable holding the log filter
const LOG_ENV: &str = "TAGDIR_LOG";

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatch the parsed command
///
/// # Errors
///
/// Returns `TagdirError` if configuration loading fails or the command fails.
fn run(cli: Cli) -> Result<()> {
    let config = TagdirConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Ls {
            list_args,
            sort,
            desc,
            json,
        } => commands::list(
            list_args,
            sort.unwrap_or(config.default_sort),
            *desc || config.descending,
            *json,
            config.path_format,
            quiet,
        ),
        Commands::Tags { list_args } => commands::tags(list_args, quiet),
        Commands::Set {
            path,
            tags,
            add,
            remove,
        } => commands::set(
            path,
            tags,
            SetMode::from_flags(*add, *remove),
            RetryPolicy::from_config(&config),
            config.path_format,
            quiet,
        ),
        Commands::Normalize { paths } => {
            commands::normalize(paths, RetryPolicy::from_config(&config), quiet)
        }
        Commands::ReplaceTag {
            old_tag,
            new_tag,
            bulk_args,
        } => commands::replace_tag(old_tag, new_tag, bulk_args, quiet),
        Commands::DeleteTag { tag, bulk_args } => commands::delete_tag(tag, bulk_args, quiet),
        Commands::Config { command } => commands::config(config, command, quiet),
    }
}

/// Main entry point for the tagdir application
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
