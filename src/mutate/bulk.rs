use std::path::Path;

use tracing::{debug, warn};

use crate::filter::TagFilter;
use crate::query::{self, QueryError};
use crate::sort::SortMethod;
use crate::tagged::TaggedPath;

use super::core::{BulkOpSummary, Retag, RetagPlan};
use super::error::MutationError;
use super::rename::rename_to;

/// Plan renaming `old_tag` to `new_tag` on every entry directly inside
/// `folder`.
///
/// Every occurrence of `old_tag` is removed and `new_tag` takes the place of
/// the first one, unless the entry already carries `new_tag`. Planning the
/// same tag for both yields an empty plan.
///
/// # Errors
/// Returns a `QueryError` if `folder` itself cannot be listed.
pub fn plan_replace_tag(
    folder: impl AsRef<Path>,
    old_tag: &str,
    new_tag: &str,
) -> Result<RetagPlan, QueryError> {
    if old_tag == new_tag {
        return Ok(RetagPlan::default());
    }
    plan(folder.as_ref(), old_tag, |tags| replaced(tags, old_tag, new_tag))
}

/// Plan removing every occurrence of `tag` from the entries directly inside
/// `folder`.
///
/// # Errors
/// Returns a `QueryError` if `folder` itself cannot be listed.
pub fn plan_delete_tag(folder: impl AsRef<Path>, tag: &str) -> Result<RetagPlan, QueryError> {
    plan(folder.as_ref(), tag, |tags| {
        tags.iter().filter(|t| *t != tag).cloned().collect()
    })
}

/// Carry out a plan. Each entry is renamed independently; failures are
/// collected and processing continues. Unreadable entries from the plan are
/// passed through as skips, not failures.
pub fn apply_plan(plan: RetagPlan) -> BulkOpSummary {
    let mut summary = BulkOpSummary::new();
    for entry in plan.skipped {
        summary.add_skip(entry);
    }

    for retag in plan.retags {
        match rename_to(&retag.from, retag.to.clone()) {
            Ok(_) => summary.add_success(retag),
            Err(e) => {
                warn!(path = %retag.from.full_path().display(), error = %e, "rename failed, continuing");
                summary.add_error(e);
            }
        }
    }
    summary
}

/// Rename `old_tag` to `new_tag` on every entry directly inside `folder`.
///
/// A no-op when both tags are equal.
///
/// # Errors
/// Returns `MutationError::Query` if `folder` itself cannot be listed.
/// Per-entry failures are returned in the summary.
pub fn replace_tag_in_folder(
    folder: impl AsRef<Path>,
    old_tag: &str,
    new_tag: &str,
) -> Result<BulkOpSummary, MutationError> {
    let plan = plan_replace_tag(folder, old_tag, new_tag)?;
    Ok(apply_plan(plan))
}

/// Remove `tag` from every entry directly inside `folder`.
///
/// # Errors
/// Returns `MutationError::Query` if `folder` itself cannot be listed.
/// Per-entry failures are returned in the summary.
pub fn delete_tag_in_folder(
    folder: impl AsRef<Path>,
    tag: &str,
) -> Result<BulkOpSummary, MutationError> {
    let plan = plan_delete_tag(folder, tag)?;
    Ok(apply_plan(plan))
}

fn plan<F>(folder: &Path, tag: &str, edit: F) -> Result<RetagPlan, QueryError>
where
    F: Fn(&[String]) -> Vec<String>,
{
    let filter = TagFilter::new([tag], Vec::<String>::new());
    let listing = query::list(folder, &filter, SortMethod::Name, false)?;

    let retags: Vec<Retag> = listing
        .entries
        .into_iter()
        .map(|entry: TaggedPath| {
            let tags = edit(entry.tags());
            Retag::new(entry, &tags)
        })
        .collect();

    debug!(folder = %folder.display(), tag, planned = retags.len(), "planned retag");
    Ok(RetagPlan {
        retags,
        skipped: listing.skipped,
    })
}

fn replaced(tags: &[String], old_tag: &str, new_tag: &str) -> Vec<String> {
    let mut placed = tags.iter().any(|t| t == new_tag);
    let mut out = Vec::with_capacity(tags.len());
    for tag in tags {
        if tag != old_tag {
            out.push(tag.clone());
        } else if !placed {
            out.push(new_tag.to_string());
            placed = true;
        }
    }
    out
}
