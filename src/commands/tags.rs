//! Tags command - list the tags used in a folder

use crate::{TagdirError, cli::ListArgs, query, sort::SortMethod};

type Result<T> = std::result::Result<T, TagdirError>;

/// Execute the tags command
///
/// # Errors
/// Returns an error if the folder cannot be listed.
pub fn execute(args: &ListArgs, quiet: bool) -> Result<()> {
    let expression = args.filter.as_deref().unwrap_or_default();
    let listing = query::list_matching(&args.dir, expression, SortMethod::Name, false)?;

    if listing.known_tags.is_empty() {
        if !quiet {
            println!("No tags found in {}.", args.dir.display());
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in {}:", args.dir.display());
    }
    for tag in &listing.known_tags {
        if quiet {
            println!("{tag}");
        } else {
            println!("  {tag}");
        }
    }
    Ok(())
}
