//! Retrying renames that fail because another program holds the file open

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::config::TagdirConfig;
use crate::mutate::MutationError;

/// How many times, and how far apart, a transient rename failure is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    /// A single attempt, no retries
    pub const ONCE: Self = Self {
        attempts: 1,
        delay: Duration::ZERO,
    };

    #[must_use]
    pub const fn from_config(config: &TagdirConfig) -> Self {
        Self {
            attempts: config.rename_retries,
            delay: config.retry_delay(),
        }
    }

    /// Run `op` until it succeeds, fails permanently, or attempts run out.
    ///
    /// # Errors
    /// Returns the last error from `op`.
    pub fn run<T, F>(&self, mut op: F) -> Result<T, MutationError>
    where
        F: FnMut() -> Result<T, MutationError>,
    {
        let mut attempt = 1;
        loop {
            match op() {
                Err(e) if e.is_transient() && attempt < self.attempts => {
                    debug!(attempt, error = %e, "rename blocked, retrying");
                    thread::sleep(self.delay);
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}
