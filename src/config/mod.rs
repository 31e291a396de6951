//! Configuration module for tagdir
//!
//! Holds the defaults the command line falls back on: sort order, output
//! style, and how hard to retry renaming a file another program holds open.
//! Configuration is stored in the user's config directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::sort::SortMethod;

/// Keys accepted by [`TagdirConfig::get`] and [`TagdirConfig::set`]
pub const KEYS: [&str; 6] = [
    "default_sort",
    "descending",
    "quiet",
    "path_format",
    "rename_retries",
    "retry_delay_ms",
];

/// Path display format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathFormat {
    /// Display absolute paths
    Absolute,
    /// Display the entry name only
    #[default]
    Name,
}

impl PathFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Name => "name",
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TagdirConfig {
    /// Sort method used when `--sort` is not given
    #[serde(default)]
    pub default_sort: SortMethod,

    /// List in descending order by default
    #[serde(default)]
    pub descending: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// How listed entries are printed
    #[serde(default)]
    pub path_format: PathFormat,

    /// Attempts made to rename a file that is in use elsewhere
    #[serde(default = "default_rename_retries")]
    pub rename_retries: u32,

    /// Pause between those attempts, in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

const fn default_rename_retries() -> u32 {
    10
}

const fn default_retry_delay_ms() -> u64 {
    100
}

impl Default for TagdirConfig {
    fn default() -> Self {
        Self {
            default_sort: SortMethod::default(),
            descending: false,
            quiet: false,
            path_format: PathFormat::default(),
            rename_retries: default_rename_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl TagdirConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tagdir").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `config_path`, writing defaults there if the
    /// file is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `config_path`
    ///
    /// # Errors
    ///
    /// Same as [`TagdirConfig::save`].
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Current value of `key` as text, `None` for unknown keys
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "default_sort" => self.default_sort.to_string(),
            "descending" => self.descending.to_string(),
            "quiet" => self.quiet.to_string(),
            "path_format" => self.path_format.as_str().to_string(),
            "rename_retries" => self.rename_retries.to_string(),
            "retry_delay_ms" => self.retry_delay_ms.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Parse `value` and assign it to `key`. Does not save.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys and values that do not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |expected: &str| {
            ConfigError::Message(format!("Invalid value for {key}: '{value}'. Expected {expected}"))
        };

        match key {
            "default_sort" => {
                self.default_sort = SortMethod::from_str(value, true)
                    .map_err(|_| invalid("name, date, comic or shuffle"))?;
            }
            "descending" => self.descending = value.parse().map_err(|_| invalid("true or false"))?,
            "quiet" => self.quiet = value.parse().map_err(|_| invalid("true or false"))?,
            "path_format" => {
                self.path_format = match value {
                    "absolute" => PathFormat::Absolute,
                    "name" => PathFormat::Name,
                    _ => return Err(invalid("absolute or name")),
                };
            }
            "rename_retries" => {
                let retries: u32 = value.parse().map_err(|_| invalid("a positive number"))?;
                if retries == 0 {
                    return Err(invalid("a positive number"));
                }
                self.rename_retries = retries;
            }
            "retry_delay_ms" => {
                self.retry_delay_ms = value.parse().map_err(|_| invalid("a number of milliseconds"))?;
            }
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Pause between rename attempts
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TagdirConfig::default();
        assert_eq!(config.default_sort, SortMethod::Name);
        assert!(!config.descending);
        assert_eq!(config.path_format, PathFormat::Name);
        assert_eq!(config.rename_retries, 10);
        assert_eq!(config.retry_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_get_every_key() {
        let config = TagdirConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(config.get("default_sort").as_deref(), Some("name"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut config = TagdirConfig::default();
        config.set("default_sort", "comic").unwrap();
        config.set("descending", "true").unwrap();
        config.set("path_format", "absolute").unwrap();
        config.set("rename_retries", "3").unwrap();

        assert_eq!(config.default_sort, SortMethod::Comic);
        assert!(config.descending);
        assert_eq!(config.get("path_format").as_deref(), Some("absolute"));
        assert_eq!(config.rename_retries, 3);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = TagdirConfig::default();
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("default_sort", "size").is_err());
        assert!(config.set("rename_retries", "0").is_err());
        assert!(config.set("database", "x").is_err());
        assert_eq!(config, TagdirConfig::default());
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tagdir").join("config.toml");

        let config = TagdirConfig::load_from(&path).unwrap();

        assert_eq!(config, TagdirConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = TagdirConfig::default();
        config.set("default_sort", "date").unwrap();
        config.set("retry_delay_ms", "250").unwrap();

        config.save_to(&path).unwrap();
        let reloaded = TagdirConfig::load_from(&path).unwrap();

        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let config = TagdirConfig::load_from(&path).unwrap();

        assert!(config.quiet);
        assert_eq!(config.rename_retries, 10);
        assert_eq!(config.default_sort, SortMethod::Name);
    }
}
