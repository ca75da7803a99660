//! Configuration management.
//!
//! This module handles loading, validating, and saving export configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory.
const CONFIG_DIR_NAME: &str = "custard-kit";

/// Export settings used by [`crate::services::DirectoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory custard files are written to
    pub output_dir: PathBuf,
    /// Indent the written JSON
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let output_dir =
            Self::default_output_dir().unwrap_or_else(|_| PathBuf::from("results"));

        Self {
            output_dir,
            pretty: true,
        }
    }
}

impl ExportConfig {
    /// Gets the default output directory path.
    ///
    /// - Linux: `~/.config/custard-kit/results/`
    /// - macOS: `~/Library/Application Support/custard-kit/results/`
    /// - Windows: `%APPDATA%\custard-kit\results\`
    fn default_output_dir() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("results"))
    }
}

/// Library configuration.
///
/// # File Location
///
/// - Linux: `~/.config/custard-kit/config.toml`
/// - macOS: `~/Library/Application Support/custard-kit/config.toml`
/// - Windows: `%APPDATA%\custard-kit\config.toml`
///
/// # Validation
///
/// - `output_dir` must be non-empty
/// - `output_dir`, if it exists, must be a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using a temp file and atomic rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let output_dir = &self.export.output_dir;

        if output_dir.as_os_str().is_empty() {
            anyhow::bail!("Export output directory cannot be empty");
        }

        if output_dir.exists() && !output_dir.is_dir() {
            anyhow::bail!(
                "Export output path is not a directory: {}",
                output_dir.display()
            );
        }

        Ok(())
    }
}
