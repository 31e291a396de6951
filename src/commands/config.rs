//! Config command - get and set configuration values

use crate::{TagdirError, cli::ConfigCommands, config::TagdirConfig};

type Result<T> = std::result::Result<T, TagdirError>;

/// Execute the config command
///
/// # Errors
/// Returns `TagdirError` if the key is unknown, the value does not parse, or
/// the configuration cannot be saved.
pub fn execute(mut config: TagdirConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                TagdirError::InvalidInput("Invalid format. Use: tagdir config set key=value".into())
            })?;
            let (key, value) = (key.trim(), value.trim());

            config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => {
            let value = config
                .get(key)
                .ok_or_else(|| TagdirError::InvalidInput(format!("Unknown configuration key: '{key}'")))?;
            println!("{value}");
        }
    }
    Ok(())
}
