//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the moon-config.toml file.
//! It provides the observer's time zone (as a fixed UTC offset, no time-zone database is
//! consulted) and output preferences for the `moon-tracker` binary.

use crate::error::MoonError;
use chrono::FixedOffset;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "moon-config.toml";

/// Application configuration loaded from moon-config.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Where the civil day is observed
    pub observer: ObserverConfig,
    /// How results are printed
    pub output: OutputConfig,
}

/// Observer location, reduced to what the day boundaries need
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObserverConfig {
    /// Human-readable place name for reference
    pub name: String,
    /// Minutes east of UTC (e.g. -420 for Pacific Daylight Time)
    pub utc_offset_minutes: i32,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Print JSON instead of a text summary
    pub json: bool,
    /// Report the exact phase at the instant instead of the calendar-day phase
    pub exact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            observer: ObserverConfig {
                name: "Greenwich".to_string(),
                utc_offset_minutes: 0,
            },
            output: OutputConfig {
                json: false,
                exact: false,
            },
        }
    }
}

impl Config {
    /// Load configuration from moon-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!("Loaded configuration for observer: {}", config.observer.name);
                    config
                }
                Err(e) => {
                    warn!("Invalid config file format in {}: {}", path.display(), e);
                    warn!("Using default configuration (UTC)");
                    Self::default()
                }
            },
            Err(_) => {
                info!("No config file at {}, using default configuration (UTC)", path.display());
                Self::default()
            }
        }
    }

    /// Save current configuration as pretty TOML
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Observer's time zone as a fixed offset
    pub fn time_zone(&self) -> Result<FixedOffset, MoonError> {
        let seconds = self.observer.utc_offset_minutes.saturating_mul(60);
        FixedOffset::east_opt(seconds).ok_or(MoonError::InvalidUtcOffset(seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.observer.name, "Greenwich");
        assert_eq!(config.observer.utc_offset_minutes, 0);
        assert!(!config.output.json);
        assert!(!config.output.exact);
        assert_eq!(config.time_zone().unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"
[observer]
name = "Los Angeles"
utc_offset_minutes = -420

[output]
json = true
exact = false
"#,
        )
        .unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.observer.name, "Los Angeles");
        assert_eq!(config.time_zone().unwrap().local_minus_utc(), -7 * 3600);
        assert!(config.output.json);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "observer = 3").unwrap();
        assert_eq!(Config::load_from_path(file.path()), Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.observer.utc_offset_minutes = 540;
        config.save_to_path(file.path()).unwrap();
        assert_eq!(Config::load_from_path(file.path()), config);
    }

    #[test]
    fn test_out_of_range_offset_rejected() {
        let mut config = Config::default();
        config.observer.utc_offset_minutes = 25 * 60;
        assert_eq!(
            config.time_zone(),
            Err(MoonError::InvalidUtcOffset(25 * 3600))
        );
    }
}
