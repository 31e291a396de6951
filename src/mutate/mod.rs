//! Tag mutation - renaming entries on disk to change their tags
//!
//! - `rename`: single-entry renames (`rename_with_tags`, `rename_to`)
//! - `bulk`: folder-wide tag replace/delete, split into a pure planning step
//!   and an apply step so callers can preview
//! - `core`: plan and summary types shared by both
//!
//! All operations are synchronous and make exactly one rename attempt per
//! entry. Bulk operations never stop at the first failure: every entry is
//! tried and the failures come back together in a [`BulkOpSummary`].

mod bulk;
mod core;
pub mod error;
mod rename;

pub use bulk::{
    apply_plan, delete_tag_in_folder, plan_delete_tag, plan_replace_tag, replace_tag_in_folder,
};
pub use self::core::{BulkOpSummary, Retag, RetagPlan};
pub use error::{MAX_NAME_LEN, MutationError, RenameFailure, name_length};
pub use rename::{rename_to, rename_with_tags};
