use std::fs;

use tracing::debug;

use crate::tagged::TaggedPath;

use super::error::{MAX_NAME_LEN, MutationError, RenameFailure, name_length};

/// Give `path` exactly `new_tags` and rename it on disk.
///
/// Makes a single attempt; retrying a file that is held open elsewhere is up
/// to the caller (see [`MutationError::is_transient`]).
///
/// # Errors
/// Returns `MutationError::RenameFailed` if the source is missing, the
/// destination already exists, the new name is too long, or the filesystem
/// refuses the rename.
pub fn rename_with_tags<S: AsRef<str>>(
    path: &TaggedPath,
    new_tags: &[S],
) -> Result<TaggedPath, MutationError> {
    rename_to(path, path.set_tags(new_tags))
}

/// Rename `path` on disk to `target`, which must live in the same folder.
///
/// A target with the same name as the source is accepted without touching
/// the disk.
///
/// # Errors
/// Same as [`rename_with_tags`].
pub fn rename_to(path: &TaggedPath, target: TaggedPath) -> Result<TaggedPath, MutationError> {
    let from = path.full_path();
    let to = target.full_path();
    let fail = |reason: RenameFailure| MutationError::RenameFailed {
        from: from.clone(),
        to: to.clone(),
        reason,
    };

    if fs::symlink_metadata(&from).is_err() {
        return Err(fail(RenameFailure::SourceMissing));
    }
    if from == to {
        return Ok(target);
    }

    let name_len = name_length(&target.name());
    if name_len > MAX_NAME_LEN {
        return Err(fail(RenameFailure::NameTooLong(name_len)));
    }
    // `fs::rename` silently replaces existing files on Unix
    if fs::symlink_metadata(&to).is_ok() && !is_case_alias_of_source(path, &target) {
        return Err(fail(RenameFailure::TargetExists));
    }

    fs::rename(&from, &to).map_err(|e| fail(RenameFailure::from_io(&e)))?;

    debug!(from = %from.display(), to = %to.display(), "renamed");
    Ok(target)
}

/// Whether the destination only "exists" because a case-insensitive
/// filesystem resolves it to the source, as in a case-only retag
/// (`a[Foo].txt` to `a[foo].txt`).
///
/// Only one entry of a folder can match a name case-insensitively on such a
/// filesystem, so if the names differ only by case and no entry carries the
/// exact destination name, the match is the source.
fn is_case_alias_of_source(source: &TaggedPath, target: &TaggedPath) -> bool {
    let (from_name, to_name) = (source.name(), target.name());
    if from_name == to_name || from_name.to_lowercase() != to_name.to_lowercase() {
        return false;
    }
    let Ok(entries) = fs::read_dir(target.parent_folder()) else {
        return false;
    };
    !entries
        .flatten()
        .any(|entry| entry.file_name().to_str() == Some(to_name.as_str()))
}
