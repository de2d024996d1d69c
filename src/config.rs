//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.
//! The content-API settings additionally honor environment overrides so
//! deployments can flip the integration on without editing the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the content API base URL.
pub const ENV_CONTENT_API_URL: &str = "PITCHDECK_CONTENT_API_URL";

/// Environment variable overriding the content integration flag.
pub const ENV_CONTENT_ENABLED: &str = "PITCHDECK_CONTENT_ENABLED";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Headless content integration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Base URL of the REST content API (WordPress-style `wp-json/wp/v2`).
    pub api_url: String,
    /// Whether the integration is active. When false every fetch is a no-op.
    pub enabled: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            api_url: "https://your-wordpress-site.com/wp-json/wp/v2".to_string(),
            enabled: false,
        }
    }
}

/// UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme display preference
    pub theme_mode: ThemeMode,
    /// Capture mouse movement for the background animation
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            mouse: true,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Headless content integration
    pub content: ContentConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/PitchDeck/`
    /// - macOS: `~/Library/Application Support/PitchDeck/`
    /// - Windows: `%APPDATA%\PitchDeck\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("PitchDeck");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the path of the debug log file.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("pitchdeck.log"))
    }

    /// Loads configuration from the config file, then applies environment
    /// overrides.
    ///
    /// If the file doesn't exist, returns default configuration (still with
    /// environment overrides applied).
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path).context(format!(
                "Failed to read config file: {}",
                config_path.display()
            ))?;

            toml::from_str(&content).context(format!(
                "Failed to parse config file: {}",
                config_path.display()
            ))?
        } else {
            Self::new()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Saves the configuration to the config file, creating the directory
    /// if needed.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let config_path = Self::config_file_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, content).context(format!(
            "Failed to write config file: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Applies `PITCHDECK_CONTENT_*` environment overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            env::var(ENV_CONTENT_API_URL).ok(),
            env::var(ENV_CONTENT_ENABLED).ok(),
        );
    }

    /// Applies the given override values. Split out so it can be tested
    /// without touching the process environment.
    fn apply_overrides(&mut self, api_url: Option<String>, enabled: Option<String>) {
        if let Some(url) = api_url {
            if !url.is_empty() {
                self.content.api_url = url;
            }
        }
        if let Some(flag) = enabled {
            self.content.enabled = matches!(flag.as_str(), "true" | "1" | "yes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_disabled() {
        let config = Config::new();
        assert!(!config.content.enabled);
        assert!(config.content.api_url.contains("wp-json/wp/v2"));
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = Config::new();
        config.apply_overrides(
            Some("https://cms.example.com/wp-json/wp/v2".to_string()),
            Some("true".to_string()),
        );
        assert_eq!(config.content.api_url, "https://cms.example.com/wp-json/wp/v2");
        assert!(config.content.enabled);
    }

    #[test]
    fn test_override_flag_parsing() {
        let mut config = Config::new();
        config.apply_overrides(None, Some("1".to_string()));
        assert!(config.content.enabled);

        config.apply_overrides(None, Some("false".to_string()));
        assert!(!config.content.enabled);

        config.apply_overrides(None, Some("garbage".to_string()));
        assert!(!config.content.enabled);
    }

    #[test]
    fn test_empty_url_override_ignored() {
        let mut config = Config::new();
        let original = config.content.api_url.clone();
        config.apply_overrides(Some(String::new()), None);
        assert_eq!(config.content.api_url, original);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::new();
        config.content.enabled = true;
        config.content.api_url = "https://cms.example.com/wp-json/wp/v2".to_string();
        config.ui.theme_mode = ThemeMode::Dark;
        config.ui.mouse = false;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
