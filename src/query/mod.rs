//! Directory query - filtered, sorted listings of one folder
//!
//! [`list`] reads the immediate children of a folder (no recursion), keeps
//! those passing a [`TagFilter`], sorts folders and files separately with the
//! chosen [`SortMethod`], and returns folders first. Folders come first for
//! every sort method and direction.
//!
//! Entries that cannot be read are skipped and reported in
//! [`Listing::skipped`]; only a failure on the folder itself aborts the call.
//!
//! # Examples
//!
//! ```no_run
//! use tagdir::filter::TagFilter;
//! use tagdir::query;
//! use tagdir::sort::SortMethod;
//!
//! let filter = TagFilter::parse("vacation -blurry");
//! let listing = query::list("/home/me/photos", &filter, SortMethod::Date, false).unwrap();
//! for entry in &listing.entries {
//!     println!("{}", entry.name());
//! }
//! ```

pub mod error;
mod known_tags;

pub use error::QueryError;
pub use known_tags::KnownTags;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::filter::TagFilter;
use crate::sort::{SortMethod, Sorter};
use crate::tagged::TaggedPath;

/// Result of listing one folder
#[derive(Debug, Default)]
pub struct Listing {
    /// Matching entries, folders first
    pub entries: Vec<TaggedPath>,
    /// Every distinct tag carried by a matching entry
    pub known_tags: KnownTags,
    /// Entries that could not be read and were left out
    pub skipped: Vec<QueryError>,
}

impl Listing {
    /// Entry names in listing order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(TaggedPath::name).collect()
    }

    /// Number of folders at the front of `entries`
    #[must_use]
    pub fn folder_count(&self) -> usize {
        self.entries.iter().take_while(|e| e.is_folder()).count()
    }
}

/// List the immediate children of `folder` that pass `filter`.
///
/// Folders and files are sorted separately, each reversed as a whole when
/// `descending` is set, and then concatenated folders-then-files.
///
/// # Errors
/// Returns `QueryError::DirectoryNotFound` if `folder` does not exist or is
/// not a folder, `QueryError::PermissionDenied` if it cannot be read, and
/// `QueryError::Io` for other failures opening it.
pub fn list(
    folder: impl AsRef<Path>,
    filter: &TagFilter,
    sort: SortMethod,
    descending: bool,
) -> Result<Listing, QueryError> {
    let folder = folder.as_ref();
    let reader = fs::read_dir(folder).map_err(|e| QueryError::from_io(folder, e))?;

    let mut listing = Listing::default();
    let mut folders = Vec::new();
    let mut files = Vec::new();

    for entry in reader {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let error = QueryError::from_io(folder, e);
                warn!(folder = %folder.display(), error = %error, "skipping unreadable entry");
                listing.skipped.push(error);
                continue;
            }
        };
        let path = entry.path();

        // Follow symlinks; fall back to the link itself when its target is gone
        let is_folder = match fs::metadata(&path).or_else(|_| entry.metadata()) {
            Ok(metadata) => metadata.is_dir(),
            Err(e) => {
                let error = QueryError::from_io(&path, e);
                warn!(path = %path.display(), error = %error, "skipping entry without metadata");
                listing.skipped.push(error);
                continue;
            }
        };

        let tagged = match TaggedPath::parse(&path, is_folder) {
            Ok(tagged) => tagged,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping entry with unusable name");
                listing.skipped.push(QueryError::UnreadableEntry {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if !filter.matches(&tagged) {
            continue;
        }
        listing.known_tags.record(tagged.tags());

        if is_folder {
            folders.push(tagged);
        } else {
            files.push(tagged);
        }
    }

    let mut sorter = Sorter::new(sort);
    sorter.sort(&mut folders, descending);
    sorter.sort(&mut files, descending);

    debug!(
        folder = %folder.display(),
        filter = %filter,
        sort = %sort,
        descending,
        folders = folders.len(),
        files = files.len(),
        skipped = listing.skipped.len(),
        "listed folder"
    );

    folders.append(&mut files);
    listing.entries = folders;
    Ok(listing)
}

/// [`list`] with a filter expression instead of a compiled filter
///
/// # Errors
/// Same as [`list`].
pub fn list_matching(
    folder: impl AsRef<Path>,
    expression: &str,
    sort: SortMethod,
    descending: bool,
) -> Result<Listing, QueryError> {
    list(folder, &TagFilter::parse(expression), sort, descending)
}
