//! Config command - inspect and change settings

use crate::{
    GigError,
    cli::ConfigCommands,
    config::{GigshelfConfig, KEYS},
    ui::OutputWriter,
};
use std::path::Path;

type Result<T> = std::result::Result<T, GigError>;

/// Execute a config subcommand against the file at `path`
///
/// `config` is the effective configuration (file, environment and flags) and
/// is what `show` and `get` report. `set` rereads the file alone, so
/// overrides are never persisted.
///
/// # Errors
/// Returns an error for unknown keys, invalid values, or when the file cannot
/// be written.
pub fn execute(
    config: GigshelfConfig,
    path: &Path,
    command: &ConfigCommands,
    out: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(&config).map_err(|e| {
                ::config::ConfigError::Message(format!("Failed to serialize config: {e}"))
            })?;
            out.write(text.trim_end());
        }
        ConfigCommands::Path => out.write(&path.display().to_string()),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(GigError::InvalidInput(format!(
                    "{} already exists. Use --force to overwrite",
                    path.display()
                )));
            }
            GigshelfConfig::default().save_to(path)?;
            out.success(&format!("Wrote default configuration to {}", path.display()));
        }
        ConfigCommands::Get { key } => {
            let value = config.get_value(key).ok_or_else(|| {
                GigError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    KEYS.join(", ")
                ))
            })?;
            out.write(&value);
        }
        ConfigCommands::Set { key, value } => {
            let mut stored = GigshelfConfig::load_file(path)?;
            stored.set_value(key, value)?;
            stored.save_to(path)?;
            tracing::info!(%key, %value, path = %path.display(), "config updated");
            out.success(&format!("Set {key} = {value}"));
        }
    }
    Ok(())
}
