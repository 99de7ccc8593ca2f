//! Configuration module for gigshelf
//!
//! Settings are read from `~/.config/gigshelf/config.toml` (platform-specific
//! config directory) and can be overridden with `GIGSHELF_*` environment
//! variables, e.g. `GIGSHELF_DATA_PATH=site/data/gigs.json`. A missing file
//! simply means defaults.

use crate::catalog::AssetLayout;
use clap::ValueEnum;
use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `config get` / `config set`
pub const KEYS: &[&str] = &[
    "data_path",
    "asset_root",
    "output_dir",
    "site_title",
    "quiet",
    "output_format",
];

/// Format used by the `list` command
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON array of records
    Json,
    /// CSV with one row per record
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ConfigError::Message(format!(
                "Invalid output format '{other}'. Use text, json or csv"
            ))),
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GigshelfConfig {
    /// Path of the published catalog document
    pub data_path: PathBuf,

    /// Directory asset URLs are resolved against when prefetching
    pub asset_root: PathBuf,

    /// Where `build` writes the static site
    pub output_dir: PathBuf,

    /// Site name used in page titles
    pub site_title: String,

    /// Suppress informational output by default
    pub quiet: bool,

    /// Default format for `list`
    pub output_format: OutputFormat,

    /// Photo asset naming
    pub assets: AssetLayout,
}

impl Default for GigshelfConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/gigs.json"),
            asset_root: PathBuf::from("."),
            output_dir: PathBuf::from("site"),
            site_title: "Drying Cactus".to_string(),
            quiet: false,
            output_format: OutputFormat::Text,
            assets: AssetLayout::default(),
        }
    }
}

impl GigshelfConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("gigshelf").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file or environment overrides cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path()?)
    }

    /// Load configuration from `path`, layered with `GIGSHELF_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or an
    /// override has the wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::builder(path.as_ref())
            .add_source(
                Environment::with_prefix("GIGSHELF")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Load only what is stored in the file at `path`, ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::builder(path.as_ref()).build()?.try_deserialize()
    }

    fn builder(path: &Path) -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(false),
        )
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// See [`GigshelfConfig::save`].
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Read a top-level setting as text
    #[must_use]
    pub fn get_value(&self, key: &str) -> Option<String> {
        let value = match key {
            "data_path" => self.data_path.display().to_string(),
            "asset_root" => self.asset_root.display().to_string(),
            "output_dir" => self.output_dir.display().to_string(),
            "site_title" => self.site_title.clone(),
            "quiet" => self.quiet.to_string(),
            "output_format" => format!("{:?}", self.output_format).to_lowercase(),
            _ => return None,
        };
        Some(value)
    }

    /// Change a top-level setting from text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or values of the wrong type.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "data_path" => self.data_path = PathBuf::from(value),
            "asset_root" => self.asset_root = PathBuf::from(value),
            "output_dir" => self.output_dir = PathBuf::from(value),
            "site_title" => self.site_title = value.to_string(),
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "output_format" => self.output_format = value.parse()?,
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
