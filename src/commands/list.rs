//! List command - list a folder, filtered and sorted

use crate::{
    TagdirError,
    cli::ListArgs,
    config::PathFormat,
    output::{self, ListingView},
    query,
    sort::SortMethod,
};

type Result<T> = std::result::Result<T, TagdirError>;

/// Execute the ls command
///
/// # Errors
/// Returns an error if the folder cannot be listed.
pub fn execute(
    args: &ListArgs,
    sort: SortMethod,
    descending: bool,
    json: bool,
    path_format: PathFormat,
    quiet: bool,
) -> Result<()> {
    let expression = args.filter.as_deref().unwrap_or_default();
    let listing = query::list_matching(&args.dir, expression, sort, descending)?;

    if json {
        let rendered = serde_json::to_string_pretty(&ListingView::from(&listing))
            .map_err(std::io::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }

    if listing.entries.is_empty() {
        if !quiet {
            println!("No matching entries in {}.", args.dir.display());
        }
        return Ok(());
    }

    for entry in &listing.entries {
        if quiet {
            println!("{}", output::format_entry(entry, path_format));
        } else {
            println!("{}", output::colorize_entry(entry, path_format));
        }
    }
    Ok(())
}
