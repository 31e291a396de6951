//! Set command - change the tags of one file or folder

use std::path::Path;

use crate::{
    TagdirError,
    cli::SetMode,
    commands::retry::RetryPolicy,
    config::PathFormat,
    mutate,
    output,
    tagged::{TaggedPath, first_invalid_tag, split_tags},
};

type Result<T> = std::result::Result<T, TagdirError>;

/// Execute the set command
///
/// # Errors
/// Returns an error if a tag is invalid, the path cannot be parsed, or the
/// rename fails after all retries.
pub fn execute(
    path: &Path,
    tags: &[String],
    mode: SetMode,
    retry: RetryPolicy,
    path_format: PathFormat,
    quiet: bool,
) -> Result<()> {
    // "a b" given as one argument means two tags
    let tags: Vec<String> = tags.iter().flat_map(|t| split_tags(t)).collect();
    if let Some(tag) = first_invalid_tag(&tags) {
        return Err(TagdirError::InvalidInput(format!(
            "'{tag}' is not a valid tag (no spaces, brackets, colons or leading '-')"
        )));
    }
    if mode != SetMode::Replace && tags.is_empty() {
        return Err(TagdirError::InvalidInput("No tags provided".into()));
    }

    let tagged = TaggedPath::parse(path, path.is_dir())?;
    let new_tags = combine(tagged.tags(), &tags, mode);

    let renamed = retry.run(|| mutate::rename_with_tags(&tagged, &new_tags))?;

    if quiet {
        println!("{}", output::format_entry(&renamed, path_format));
    } else if renamed.name() == tagged.name() {
        println!("{} already has those tags", tagged.name());
    } else {
        println!("Renamed {} → {}", tagged.name(), output::format_entry(&renamed, path_format));
    }
    Ok(())
}

/// Tag list resulting from applying `given` to `current`
fn combine(current: &[String], given: &[String], mode: SetMode) -> Vec<String> {
    match mode {
        SetMode::Replace => given.to_vec(),
        SetMode::Add => {
            let mut tags = current.to_vec();
            for tag in given {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
            tags
        }
        SetMode::Remove => current.iter().filter(|t| !given.contains(t)).cloned().collect(),
    }
}
