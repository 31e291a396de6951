//! Output formatting for CLI display
//!
//! Plain and colored renderings of listings and bulk results, plus the
//! serializable view used by `--json`.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::config::PathFormat;
use crate::mutate::{BulkOpSummary, Retag};
use crate::query::{KnownTags, Listing};
use crate::tagged::TaggedPath;

/// Format an entry according to the display mode
#[must_use]
pub fn format_entry(entry: &TaggedPath, format: PathFormat) -> String {
    match format {
        PathFormat::Absolute => entry.full_path().display().to_string(),
        PathFormat::Name => entry.name(),
    }
}

/// Entry line for listings: folders in blue with a trailing `/`
#[must_use]
pub fn colorize_entry(entry: &TaggedPath, format: PathFormat) -> String {
    let formatted = format_entry(entry, format);
    if entry.is_folder() {
        format!("{formatted}/").blue().bold().to_string()
    } else {
        formatted
    }
}

/// `old → new` for one planned rename
#[must_use]
pub fn retag_line(retag: &Retag) -> String {
    format!("{} → {}", retag.from.name(), retag.to.name().green())
}

/// One entry as printed by `ls --json`
#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    pub name: String,
    pub path: PathBuf,
    pub is_folder: bool,
    pub tags: &'a [String],
}

impl<'a> From<&'a TaggedPath> for EntryView<'a> {
    fn from(entry: &'a TaggedPath) -> Self {
        Self {
            name: entry.name(),
            path: entry.full_path(),
            is_folder: entry.is_folder(),
            tags: entry.tags(),
        }
    }
}

/// A whole listing as printed by `ls --json`
#[derive(Debug, Serialize)]
pub struct ListingView<'a> {
    pub entries: Vec<EntryView<'a>>,
    pub known_tags: &'a KnownTags,
}

impl<'a> From<&'a Listing> for ListingView<'a> {
    fn from(listing: &'a Listing) -> Self {
        Self {
            entries: listing.entries.iter().map(EntryView::from).collect(),
            known_tags: &listing.known_tags,
        }
    }
}

/// Print the summary of a bulk operation, with every failure spelled out
pub fn print_summary(summary: &BulkOpSummary, operation: &str) {
    println!("\n{}", format!("=== {operation} Summary ===").bold());
    println!("  {} {}", "✓ Renamed:".green(), summary.success_count());
    if summary.skip_count() > 0 {
        println!("  {} {}", "⊘ Skipped (unreadable):".yellow(), summary.skip_count());
        for entry in &summary.skipped {
            println!("    - {entry}");
        }
    }
    if summary.has_errors() {
        println!("  {} {}", "✗ Errors:".red(), summary.error_count());
        println!("\n{}", "Error details:".red().bold());
        for error in &summary.failures {
            println!("  - {error}");
        }
    }
}
