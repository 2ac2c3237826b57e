use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Defaults for the `[output]` section of config.toml.
///
/// Any field set here behaves like an explicit CLI value: a configured
/// directory wins over the "next to the source" fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputDefaults {
    /// Base directory for generated files.
    pub directory: Option<String>,
    /// Extension for generated files.
    pub extension: Option<String>,
    /// Whether each language gets its own subfolder.
    #[serde(default)]
    pub dynamic_language_folder: Option<bool>,
}

/// Settings for the `[provider]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Base URL of the translation endpoint.
    pub endpoint: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/polyglot/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Output layout defaults.
    #[serde(default)]
    pub output: OutputDefaults,
    /// Provider settings.
    #[serde(default)]
    pub provider: ProviderSettings,
}

/// Loads configuration from disk.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    /// Builds a manager reading from an explicit path instead of the XDG
    /// location.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Loads and parses the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(&self) -> Result<ConfigFile> {
        let raw = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&raw).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the configuration, falling back to built-in defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
