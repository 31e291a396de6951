//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the filesystem.

pub mod bulk;
pub mod config;
pub mod list;
pub mod normalize;
pub mod retry;
pub mod set;
pub mod tags;

// Re-export execute functions for convenience
pub use bulk::{delete_tag, replace_tag};
pub use self::config::execute as config;
pub use list::execute as list;
pub use normalize::execute as normalize;
pub use set::execute as set;
pub use tags::execute as tags;
