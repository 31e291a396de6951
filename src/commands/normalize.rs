//! Normalize command - sort and deduplicate tags in place

use std::path::PathBuf;

use colored::Colorize;
use tracing::warn;

use crate::{
    TagdirError,
    commands::retry::RetryPolicy,
    mutate::{self, BulkOpSummary, Retag},
    output,
    tagged::TaggedPath,
};

type Result<T> = std::result::Result<T, TagdirError>;

/// Execute the normalize command
///
/// Every path is attempted even if an earlier one fails.
///
/// # Errors
/// Returns an error if a path cannot be parsed, or `PartialFailure` if any
/// rename failed.
pub fn execute(paths: &[PathBuf], retry: RetryPolicy, quiet: bool) -> Result<()> {
    let tagged: Vec<TaggedPath> = paths
        .iter()
        .map(|p| TaggedPath::parse(p, p.is_dir()))
        .collect::<std::result::Result<_, _>>()?;

    let mut summary = BulkOpSummary::new();
    for path in tagged {
        let retag = Retag {
            to: path.normalize(),
            from: path,
        };
        if retag.is_noop() {
            continue;
        }
        match retry.run(|| mutate::rename_to(&retag.from, retag.to.clone())) {
            Ok(_) => {
                if !quiet {
                    println!("{} {}", "✓".green(), output::retag_line(&retag));
                }
                summary.add_success(retag);
            }
            Err(e) => {
                warn!(path = %retag.from.full_path().display(), error = %e, "normalize failed, continuing");
                summary.add_error(e);
            }
        }
    }

    if summary.has_errors() {
        if !quiet {
            output::print_summary(&summary, "Normalize");
        }
        return Err(TagdirError::PartialFailure(summary.error_count()));
    }
    if !quiet && summary.success_count() == 0 {
        println!("Already normalized.");
    }
    Ok(())
}
