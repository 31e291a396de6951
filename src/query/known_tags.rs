use std::collections::BTreeSet;

use serde::Serialize;

/// Distinct tags seen during a listing, sorted.
///
/// Listings return a fresh set; callers merge it into whatever
/// autocomplete store they keep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KnownTags(BTreeSet<String>);

impl KnownTags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every tag in `tags`
    pub fn record<S: AsRef<str>>(&mut self, tags: &[S]) {
        for tag in tags {
            if !self.0.contains(tag.as_ref()) {
                self.0.insert(tag.as_ref().to_string());
            }
        }
    }

    /// Add all tags of `other`
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a KnownTags {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for KnownTags {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<S: Into<String>> FromIterator<S> for KnownTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
