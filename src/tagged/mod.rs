//! Tagged path module - tags stored inside file and folder names
//!
//! A tagged name keeps its tags in a bracketed region, e.g.
//! `photo[vacation beach].jpg`. This module parses such names into
//! prefix / tags / suffix, renders names back from a tag list, and provides
//! the canonical (sorted, deduplicated) form.
//!
//! # Examples
//!
//! ```
//! use tagdir::tagged::TaggedPath;
//!
//! let path = TaggedPath::parse("/photos/beach[summer 2019].jpg", false).unwrap();
//! assert_eq!(path.tags(), ["summer", "2019"]);
//!
//! let retagged = path.set_tags(&["2019", "sea"]);
//! assert_eq!(retagged.name(), "beach[2019 sea].jpg");
//! ```

pub mod error;
pub mod path;
pub mod validate;

pub use error::PathError;
pub use path::TaggedPath;
pub use validate::{first_invalid_tag, is_tag_valid, split_tags};
