//! Folder-wide tag edits: replace-tag and delete-tag
//!
//! Both commands plan first, then preview (`--dry-run`) or confirm, then
//! apply. Every entry is attempted; failures are listed in the summary and
//! turn into a non-zero exit.

use colored::Colorize;
use dialoguer::Confirm;

use crate::{
    TagdirError,
    cli::BulkArgs,
    mutate::{self, RetagPlan},
    output,
    tagged::is_tag_valid,
};

type Result<T> = std::result::Result<T, TagdirError>;

/// Preview lines shown before the "... and N more" line
const PREVIEW_LIMIT: usize = 10;

/// Rename `old_tag` to `new_tag` on every entry of the folder
///
/// # Errors
/// Returns an error if `new_tag` is invalid, the folder cannot be listed,
/// confirmation cannot be read, or any entry fails to rename.
pub fn replace_tag(old_tag: &str, new_tag: &str, args: &BulkArgs, quiet: bool) -> Result<()> {
    if !is_tag_valid(new_tag) {
        return Err(TagdirError::InvalidInput(format!("'{new_tag}' is not a valid tag")));
    }
    if old_tag == new_tag {
        if !quiet {
            println!("Old and new tag are identical, nothing to do.");
        }
        return Ok(());
    }

    let plan = mutate::plan_replace_tag(&args.dir, old_tag, new_tag)?;
    let description = format!("Rename tag '{}' → '{}'", old_tag.cyan(), new_tag.green());
    run(plan, old_tag, &description, "Replace Tag", args, quiet)
}

/// Remove `tag` from every entry of the folder
///
/// # Errors
/// Returns an error if the folder cannot be listed, confirmation cannot be
/// read, or any entry fails to rename.
pub fn delete_tag(tag: &str, args: &BulkArgs, quiet: bool) -> Result<()> {
    let plan = mutate::plan_delete_tag(&args.dir, tag)?;
    let description = format!("Remove tag '{}'", tag.cyan());
    run(plan, tag, &description, "Delete Tag", args, quiet)
}

fn run(
    plan: RetagPlan,
    tag: &str,
    description: &str,
    operation: &str,
    args: &BulkArgs,
    quiet: bool,
) -> Result<()> {
    // Unreadable entries were already logged while listing
    if plan.retags.is_empty() {
        if !quiet {
            println!("Tag '{tag}' not found in {}.", args.dir.display());
        }
        return Ok(());
    }

    if args.dry_run {
        print_preview(&plan, description);
        return Ok(());
    }

    if !args.yes && !quiet {
        let prompt = format!("{description} in {} entries?", plan.len());
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| TagdirError::InvalidInput(format!("Failed to get confirmation: {e}")))?;
        if !confirmed {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let summary = mutate::apply_plan(plan);

    if !quiet {
        for retag in &summary.renamed {
            println!("{} {}", "✓".green(), output::retag_line(retag));
        }
        output::print_summary(&summary, operation);
    }

    if summary.has_errors() {
        return Err(TagdirError::PartialFailure(summary.error_count()));
    }
    Ok(())
}

fn print_preview(plan: &RetagPlan, description: &str) {
    println!("{}", "=== Dry Run Mode ===".yellow().bold());
    println!("Planned: {description} in {} entries", plan.len());
    println!("\n{}", "Affected entries:".bold());
    for (i, retag) in plan.retags.iter().enumerate().take(PREVIEW_LIMIT) {
        println!("  {}. {}", i + 1, output::retag_line(retag));
    }
    if plan.len() > PREVIEW_LIMIT {
        println!("  ... and {} more", plan.len() - PREVIEW_LIMIT);
    }
    if !plan.skipped.is_empty() {
        println!("\n{}", "Unreadable entries:".yellow());
        for error in &plan.skipped {
            println!("  - {error}");
        }
    }
    println!("\n{}", "Run without --dry-run to apply changes.".yellow());
}
