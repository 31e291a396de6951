use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::error::PathError;

/// The tag region: an opening bracket, any run of non-`]` characters, and the
/// nearest closing bracket. Only the leftmost match counts.
static TAG_REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("tag region pattern is valid"));

/// A parsed file or folder name that may carry tags.
///
/// The name is split into three parts: `prefix`, the tag region, and `suffix`.
/// `photo[vacation beach].jpg` parses to prefix `photo`, tags
/// `["vacation", "beach"]` and suffix `.jpg`. A name without brackets keeps the
/// whole name in `prefix`.
///
/// Values are immutable. Edits such as [`TaggedPath::set_tags`] return a new
/// value and never touch the disk. The path does not need to exist.
#[derive(Debug, Clone)]
pub struct TaggedPath {
    parent: PathBuf,
    is_folder: bool,
    prefix: String,
    suffix: String,
    tags: Vec<String>,
    has_tag_region: bool,
}

impl TaggedPath {
    /// Parse a file or folder path.
    ///
    /// Relative paths are resolved against the current directory without
    /// touching the filesystem. Tag parsing itself never fails: a name
    /// without a tag region simply has no tags.
    ///
    /// # Errors
    /// Returns `PathError::InvalidPath` if the path cannot be split into a
    /// parent folder and a leaf name (`/`, `..`, empty input), if a file path
    /// ends with a separator, or if the leaf name is not valid UTF-8.
    pub fn parse(full_path: impl AsRef<Path>, is_folder: bool) -> Result<Self, PathError> {
        let raw = full_path.as_ref();
        if raw.as_os_str().is_empty() {
            return Err(PathError::invalid(raw, "path is empty"));
        }
        if !is_folder && ends_with_separator(raw) {
            return Err(PathError::invalid(raw, "file path ends with a separator"));
        }

        let absolute = std::path::absolute(raw).map_err(|e| PathError::invalid(raw, &e.to_string()))?;
        let name = absolute
            .file_name()
            .ok_or_else(|| PathError::invalid(raw, "path has no leaf name"))?
            .to_str()
            .ok_or_else(|| PathError::invalid(raw, "name is not valid UTF-8"))?;
        let parent = absolute
            .parent()
            .ok_or_else(|| PathError::invalid(raw, "path has no parent folder"))?;

        Ok(Self::from_name(parent.to_path_buf(), name, is_folder))
    }

    fn from_name(parent: PathBuf, name: &str, is_folder: bool) -> Self {
        let Some(region) = TAG_REGION.find(name) else {
            return Self {
                parent,
                is_folder,
                prefix: name.to_string(),
                suffix: String::new(),
                tags: Vec::new(),
                has_tag_region: false,
            };
        };

        // Strip the brackets
        let inner = &name[region.start() + 1..region.end() - 1];
        let tags = inner
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            parent,
            is_folder,
            prefix: name[..region.start()].to_string(),
            suffix: name[region.end()..].to_string(),
            tags,
            has_tag_region: true,
        }
    }

    /// Tags in the order they appear in the name. Duplicates are kept.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether the name contains a tag region, even an empty `[]`
    #[must_use]
    pub const fn has_tag_region(&self) -> bool {
        self.has_tag_region
    }

    #[must_use]
    pub const fn is_folder(&self) -> bool {
        self.is_folder
    }

    /// Absolute path of the folder containing this entry
    #[must_use]
    pub fn parent_folder(&self) -> &Path {
        &self.parent
    }

    /// Text before the tag region
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text after the tag region
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The entry name, tag region included.
    #[must_use]
    pub fn name(&self) -> String {
        let mut name = self.prefix.clone();
        if self.has_tag_region {
            name.push('[');
            name.push_str(&self.tags.join(" "));
            name.push(']');
        }
        name.push_str(&self.suffix);
        name
    }

    /// Text after the last `.` of the name, if there is any.
    ///
    /// `file.txt` gives `txt`; `file`, `file.` give `None`.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let name = self.name();
        let (_, ext) = split_extension(&name);
        ext.strip_prefix('.').map(str::to_string)
    }

    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        self.parent.join(self.name())
    }

    /// Whether an entry of the right kind (folder or file) exists at
    /// [`TaggedPath::full_path`].
    #[must_use]
    pub fn exists(&self) -> bool {
        let path = self.full_path();
        if self.is_folder { path.is_dir() } else { path.is_file() }
    }

    /// Copy of this path carrying exactly `new_tags`, in the given order.
    ///
    /// An existing tag region stays where it is. When there was none, the new
    /// region goes right before the extension, or at the end of a name
    /// without one. An empty list removes the brackets entirely.
    #[must_use]
    pub fn set_tags<S: AsRef<str>>(&self, new_tags: &[S]) -> Self {
        let tags: Vec<String> = new_tags.iter().map(|t| t.as_ref().to_string()).collect();

        let (prefix, suffix) = if self.has_tag_region || tags.is_empty() {
            (self.prefix.clone(), self.suffix.clone())
        } else {
            let name = self.name();
            let (stem, ext) = split_extension(&name);
            (stem.to_string(), ext.to_string())
        };

        Self {
            parent: self.parent.clone(),
            is_folder: self.is_folder,
            prefix,
            suffix,
            has_tag_region: !tags.is_empty(),
            tags,
        }
    }

    /// Canonical form: tags sorted ascending, duplicates removed, and the tag
    /// region moved right before the extension.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mut tags = self.tags.clone();
        tags.sort();
        tags.dedup();

        // Dropping the region first makes the re-insert land before the extension
        self.set_tags::<String>(&[]).set_tags(&tags)
    }
}

/// Equality is on what the path denotes: location, kind, name and tags.
/// How the name happens to be split into prefix and suffix does not matter.
impl PartialEq for TaggedPath {
    fn eq(&self, other: &Self) -> bool {
        self.is_folder == other.is_folder
            && self.parent == other.parent
            && self.tags == other.tags
            && self.name() == other.name()
    }
}

impl Eq for TaggedPath {}

impl Hash for TaggedPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parent.hash(state);
        self.is_folder.hash(state);
        self.name().hash(state);
        self.tags.hash(state);
    }
}

impl fmt::Display for TaggedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path().display())
    }
}

/// Split `name` into stem and extension (extension keeps its dot).
/// A trailing dot does not count as an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => name.split_at(dot),
        _ => (name, ""),
    }
}

fn ends_with_separator(path: &Path) -> bool {
    path.to_string_lossy()
        .chars()
        .last()
        .is_some_and(std::path::is_separator)
}
