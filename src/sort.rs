//! Sort methods for directory listings
//!
//! Each [`SortMethod`] maps a [`TaggedPath`] to a [`SortKey`]. Listings are
//! always sorted ascending with a stable sort; "descending" is applied
//! afterwards by reversing the whole sorted list, so ties come out in exactly
//! the reverse order of the ascending listing.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tagged::TaggedPath;

/// How a listing is ordered
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    /// Lexicographic by name
    #[default]
    Name,
    /// By creation time, oldest first
    Date,
    /// By the first number in the name (`page2` before `page10`)
    Comic,
    /// Random order, different on every listing
    Shuffle,
}

impl SortMethod {
    pub const ALL: [Self; 4] = [Self::Name, Self::Date, Self::Comic, Self::Shuffle];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Comic => "comic",
            Self::Shuffle => "shuffle",
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparable key extracted from a path.
///
/// Keys of one listing always share a variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Name(String),
    /// `None` when the timestamp could not be read; sorts first
    Date(Option<DateTime<Utc>>),
    Comic(u64),
    Shuffle(u64),
}

/// Extracts sort keys for one listing.
///
/// A shuffle key is drawn the first time a path is seen and kept for the
/// sorter's lifetime, so [`Sorter::compare`] is consistent across calls. A
/// fresh sorter draws fresh keys, so build one per listing.
pub struct Sorter<R: Rng = rand::rngs::ThreadRng> {
    method: SortMethod,
    rng: R,
    shuffle_keys: HashMap<PathBuf, u64>,
}

impl Sorter {
    #[must_use]
    pub fn new(method: SortMethod) -> Self {
        Self::with_rng(method, rand::thread_rng())
    }
}

impl<R: Rng> Sorter<R> {
    /// Sorter drawing shuffle keys from `rng`
    #[must_use]
    pub fn with_rng(method: SortMethod, rng: R) -> Self {
        Self {
            method,
            rng,
            shuffle_keys: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn method(&self) -> SortMethod {
        self.method
    }

    /// Ordering key of `path`. Only `Date` reads the filesystem.
    pub fn key(&mut self, path: &TaggedPath) -> SortKey {
        match self.method {
            SortMethod::Name => SortKey::Name(path.name()),
            SortMethod::Date => SortKey::Date(creation_time(path)),
            SortMethod::Comic => SortKey::Comic(comic_number(&path.name())),
            SortMethod::Shuffle => {
                let rng = &mut self.rng;
                let key = *self
                    .shuffle_keys
                    .entry(path.full_path())
                    .or_insert_with(|| rng.r#gen());
                SortKey::Shuffle(key)
            }
        }
    }

    /// Ascending comparison of two paths
    pub fn compare(&mut self, a: &TaggedPath, b: &TaggedPath) -> Ordering {
        let ka = self.key(a);
        let kb = self.key(b);
        ka.cmp(&kb)
    }

    /// Stable ascending sort, then a whole-list reversal when `descending`.
    pub fn sort(&mut self, paths: &mut Vec<TaggedPath>, descending: bool) {
        paths.sort_by_cached_key(|p| self.key(p));
        if descending {
            paths.reverse();
        }
    }
}

/// First run of ASCII digits anywhere in `name`, as a number.
///
/// Names without digits, and runs too large for `u64`, get `u64::MAX` so they
/// sort after everything else.
#[must_use]
pub fn comic_number(name: &str) -> u64 {
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(u64::MAX)
}

/// Creation time, or modification time where the platform does not record
/// creation
fn creation_time(path: &TaggedPath) -> Option<DateTime<Utc>> {
    let metadata = fs::metadata(path.full_path()).ok()?;
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}
