//! Tag filter expressions
//!
//! A filter expression is a whitespace-separated list of tokens:
//!
//! - `foo` requires the tag `foo`
//! - `-foo` forbids the tag `foo`
//! - `:untagged:` anywhere in the expression matches only entries without
//!   tags, and every other token is ignored
//!
//! The empty expression matches everything. Matching is exact and
//! case-sensitive.
//!
//! # Examples
//!
//! ```
//! use tagdir::filter::TagFilter;
//! use tagdir::tagged::TaggedPath;
//!
//! let filter = TagFilter::parse("bar -foo");
//! let yes = TaggedPath::parse("/d/file1[bar].txt", false).unwrap();
//! let no = TaggedPath::parse("/d/file2[foo bar].txt", false).unwrap();
//! assert!(filter.matches(&yes));
//! assert!(!filter.matches(&no));
//! ```

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::tagged::TaggedPath;

/// Sentinel token selecting untagged entries only
pub const UNTAGGED_TOKEN: &str = ":untagged:";

/// Prefix marking a forbidden tag
const FORBID_PREFIX: char = '-';

/// Compiled filter expression.
///
/// Parse once and reuse it for every entry of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    required: BTreeSet<String>,
    forbidden: BTreeSet<String>,
    untagged_only: bool,
}

impl TagFilter {
    /// Parse a filter expression. Any string is a valid filter.
    #[must_use]
    pub fn parse(expression: &str) -> Self {
        let tokens: Vec<&str> = expression.split_whitespace().collect();

        if tokens.contains(&UNTAGGED_TOKEN) {
            return Self::untagged();
        }

        let mut filter = Self::default();
        for token in tokens {
            match token.strip_prefix(FORBID_PREFIX) {
                Some(tag) => filter.forbidden.insert(tag.to_string()),
                None => filter.required.insert(token.to_string()),
            };
        }
        filter
    }

    /// Build a filter from tag lists directly, without tokenizing.
    #[must_use]
    pub fn new<I, J, S, T>(required: I, forbidden: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            forbidden: forbidden.into_iter().map(Into::into).collect(),
            untagged_only: false,
        }
    }

    /// Filter matching only entries with no tags
    #[must_use]
    pub fn untagged() -> Self {
        Self {
            untagged_only: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn required_tags(&self) -> &BTreeSet<String> {
        &self.required
    }

    #[must_use]
    pub const fn forbidden_tags(&self) -> &BTreeSet<String> {
        &self.forbidden
    }

    #[must_use]
    pub const fn is_untagged_only(&self) -> bool {
        self.untagged_only
    }

    /// True when the filter lets every entry through
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.untagged_only && self.required.is_empty() && self.forbidden.is_empty()
    }

    /// Whether `path` passes the filter
    #[must_use]
    pub fn matches(&self, path: &TaggedPath) -> bool {
        self.matches_tags(path.tags())
    }

    /// Whether a tag list passes the filter
    #[must_use]
    pub fn matches_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        if self.untagged_only {
            return tags.is_empty();
        }

        let has = |wanted: &String| tags.iter().any(|t| t.as_ref() == wanted);
        self.required.iter().all(has) && !self.forbidden.iter().any(has)
    }
}

impl FromStr for TagFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for TagFilter {
    fn from(expression: &str) -> Self {
        Self::parse(expression)
    }
}

/// Canonical expression: required tags, then forbidden tags, each sorted.
impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.untagged_only {
            return f.write_str(UNTAGGED_TOKEN);
        }
        let tokens: Vec<String> = self
            .required
            .iter()
            .cloned()
            .chain(self.forbidden.iter().map(|t| format!("{FORBID_PREFIX}{t}")))
            .collect();
        f.write_str(&tokens.join(" "))
    }
}
