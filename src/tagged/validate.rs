//! Caller-side tag validation
//!
//! The core never rejects a tag: any string can be written into a tag region,
//! it just may not parse back the same way. Front-ends should check user
//! input with [`is_tag_valid`] before handing it to a write operation.

/// Characters that would corrupt the tag region if they appeared in a tag
const FORBIDDEN_CHARS: [char; 3] = ['[', ']', ':'];

/// Whether `tag` can be stored in a file name and parsed back unchanged.
///
/// A valid tag is non-empty, contains no whitespace, none of `[`, `]`, `:`,
/// and does not start with `-` (which filter expressions read as "forbidden").
#[must_use]
pub fn is_tag_valid(tag: &str) -> bool {
    !tag.is_empty()
        && !tag.starts_with('-')
        && !tag
            .chars()
            .any(|c| c.is_whitespace() || FORBIDDEN_CHARS.contains(&c))
}

/// Split free text from a tag editor into tags.
///
/// Any whitespace (spaces, tabs, newlines) separates tags; empty tokens are
/// dropped. Order and duplicates are preserved.
#[must_use]
pub fn split_tags(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// The first tag in `tags` that fails [`is_tag_valid`], if any
#[must_use]
pub fn first_invalid_tag<S: AsRef<str>>(tags: &[S]) -> Option<&str> {
    tags.iter().map(AsRef::as_ref).find(|t| !is_tag_valid(t))
}
