//! User configuration loaded from `~/.config/toolbelt/config.toml`.
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::password::{MAX_BATCH, MAX_LENGTH, MIN_LENGTH, PasswordOptions};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event loop tick in milliseconds
    pub tick_rate_ms: u64,
    /// Color shown when the color tab opens
    pub start_color: String,
    pub password: PasswordConfig,
    pub dday: DdayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            start_color: "#FF6B35".to_string(),
            password: PasswordConfig::default(),
            dday: DdayConfig::default(),
        }
    }
}

/// Password generator defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
    pub exclude_ambiguous: bool,
    pub batch_size: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        let options = PasswordOptions::default();
        Self {
            length: options.length,
            uppercase: options.uppercase,
            lowercase: options.lowercase,
            numbers: options.numbers,
            special: options.special,
            exclude_ambiguous: options.exclude_ambiguous,
            batch_size: 5,
        }
    }
}

impl PasswordConfig {
    /// Generator options, with the length clamped to the supported range.
    pub fn options(&self) -> PasswordOptions {
        PasswordOptions {
            length: self.length.clamp(MIN_LENGTH, MAX_LENGTH),
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            numbers: self.numbers,
            special: self.special,
            exclude_ambiguous: self.exclude_ambiguous,
        }
    }

    /// Batch size clamped to `1..=MAX_BATCH`.
    pub fn batch_size(&self) -> usize {
        self.batch_size.clamp(1, MAX_BATCH)
    }
}

/// D-Day calculator defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DdayConfig {
    /// Offset applied by the "days from today" preset
    pub default_offset_days: u64,
}

impl Default for DdayConfig {
    fn default() -> Self {
        Self {
            default_offset_days: 100,
        }
    }
}

/// Shortest tick the event loop accepts.
pub const MIN_TICK_RATE_MS: u64 = 16;

impl Config {
    /// Event loop tick, never shorter than [`MIN_TICK_RATE_MS`].
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::ParseFailed)
    }

    /// Read and parse the config file at `path`.
    pub fn from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
        Self::from_toml_str(&content)
    }

    /// Load the user's config, falling back to defaults.
    ///
    /// A missing file is normal; an unreadable or malformed one is logged.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            tracing::debug!("No config directory found, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::from_path(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("{} ({:?}), using defaults", e, path);
                Self::default()
            }
        }
    }
}

/// Returns the config file path inside the user's config directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("toolbelt").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r##"
            start_color = "#00FF00"

            [password]
            length = 24
            special = false
            "##,
        )
        .unwrap();

        assert_eq!(config.start_color, "#00FF00");
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.password.length, 24);
        assert!(!config.password.special);
        assert!(config.password.uppercase);
        assert_eq!(config.password.batch_size, 5);
        assert_eq!(config.dday.default_offset_days, 100);
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let err = Config::from_toml_str("tick_rate_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Config::from_path(std::path::Path::new("/nonexistent/toolbelt.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed(_)));
    }

    #[test]
    fn test_password_length_is_clamped() {
        let config = PasswordConfig {
            length: 500,
            ..PasswordConfig::default()
        };
        assert_eq!(config.options().length, MAX_LENGTH);
    }

    #[test]
    fn test_batch_size_is_clamped() {
        let config = Config::from_toml_str("[password]\nbatch_size = 1000000").unwrap();
        assert_eq!(config.password.batch_size(), MAX_BATCH);
        let config = Config::from_toml_str("[password]\nbatch_size = 0").unwrap();
        assert_eq!(config.password.batch_size(), 1);
    }

    #[test]
    fn test_zero_tick_rate_uses_minimum() {
        let config = Config::from_toml_str("tick_rate_ms = 0").unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(MIN_TICK_RATE_MS));
        assert_eq!(Config::default().tick_rate(), Duration::from_millis(250));
    }
}
