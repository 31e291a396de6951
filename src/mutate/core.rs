use crate::query::QueryError;
use crate::tagged::TaggedPath;

use super::error::MutationError;

/// One planned rename: an entry and what it becomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retag {
    pub from: TaggedPath,
    pub to: TaggedPath,
}

impl Retag {
    /// Plan giving `from` exactly `tags`
    #[must_use]
    pub fn new<S: AsRef<str>>(from: TaggedPath, tags: &[S]) -> Self {
        let to = from.set_tags(tags);
        Self { from, to }
    }

    /// True when the rename would not change the name
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from.name() == self.to.name()
    }
}

/// Renames planned for one folder, plus entries that could not be read while
/// planning
#[derive(Debug, Default)]
pub struct RetagPlan {
    pub retags: Vec<Retag>,
    pub skipped: Vec<QueryError>,
}

impl RetagPlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.retags.is_empty() && self.skipped.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.retags.len()
    }
}

/// Outcome of a bulk operation.
///
/// Every entry is attempted; failures are collected instead of aborting.
/// Entries that could not be read while planning were never attempted, so
/// they are kept apart in `skipped` and do not count as failures.
#[derive(Debug, Default)]
pub struct BulkOpSummary {
    /// Renames that went through
    pub renamed: Vec<Retag>,
    /// Every failed rename, in processing order
    pub failures: Vec<MutationError>,
    /// Entries left out of the plan because they could not be read
    pub skipped: Vec<QueryError>,
}

impl BulkOpSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_success(&mut self, retag: Retag) {
        self.renamed.push(retag);
    }

    pub fn add_error(&mut self, error: MutationError) {
        self.failures.push(error);
    }

    pub fn add_skip(&mut self, entry: QueryError) {
        self.skipped.push(entry);
    }

    #[must_use]
    pub fn success_count(&self) -> usize {
        self.renamed.len()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }
}
