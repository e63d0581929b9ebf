//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the CLI configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::CONFIG_DIR_NAME;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Invalid output format '{other}'. Expected 'text' or 'json'"),
        }
    }
}

/// Output preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default format when no `--json` flag is given
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

/// Default JSON pretty-printing
fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

/// Logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Default log level
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Log levels accepted in the config file.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/OverviewSdk/config.toml`
/// - macOS: `~/Library/Application Support/OverviewSdk/config.toml`
/// - Windows: `%APPDATA%\OverviewSdk\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging preferences
    #[serde(default)]
    pub logging: LoggingConfig,
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

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, defaulting when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using temp file + rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
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
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_log_level() {
        let mut config = Config::new();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "debug".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.output.format = OutputFormat::Json;
        config.output.pretty = false;
        config.save_to(&config_file).unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
        assert!(!config_file.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_config_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_config_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[output]\nformat = \"json\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.output.format, OutputFormat::Json);
        assert!(loaded.output.pretty);
        assert_eq!(loaded.logging.level, "warn");
    }

    #[test]
    fn test_config_rejects_bad_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());

        fs::write(&config_file, "output = 3").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
