//! Configuration management for packetdeck

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration, loaded from `~/.packetdeck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Capture command driven in line mode (default: tcpdump)
    #[serde(default = "default_capture_command")]
    pub capture_command: String,

    /// Interface to capture on (None lets the capture command pick)
    #[serde(default)]
    pub interface: Option<String>,

    /// BPF capture filter expression, e.g. "not tcp port 22"
    #[serde(default)]
    pub capture_filter: Option<String>,

    /// Rolling packet buffer size; None keeps every packet
    #[serde(default)]
    pub packet_buffer_limit: Option<usize>,

    /// Log file retention in days (default: 7)
    #[serde(default = "default_log_retention_days")]
    pub log_retention_days: u64,
}

fn default_capture_command() -> String {
    "tcpdump".to_string()
}

fn default_log_retention_days() -> u64 {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture_command: default_capture_command(),
            interface: None,
            capture_filter: None,
            packet_buffer_limit: None,
            log_retention_days: default_log_retention_days(),
        }
    }
}

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = config_file_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_file_path(), content).context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the base configuration directory (~/.packetdeck)
/// Falls back to ./.packetdeck if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".packetdeck")
    })
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".packetdeck"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Ensure all required directories exist
pub fn ensure_directories() -> Result<()> {
    std::fs::create_dir_all(config_dir()).context("Failed to create config directory")?;
    std::fs::create_dir_all(logs_dir()).context("Failed to create logs directory")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.capture_command, "tcpdump");
        assert_eq!(config.packet_buffer_limit, None);
        assert_eq!(config.log_retention_days, 7);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.interface = Some("wlan0".to_string());
        config.packet_buffer_limit = Some(5000);

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.interface.as_deref(), Some("wlan0"));
        assert_eq!(parsed.packet_buffer_limit, Some(5000));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("capture_filter = \"not tcp port 22\"").unwrap();
        assert_eq!(parsed.capture_filter.as_deref(), Some("not tcp port 22"));
        assert_eq!(parsed.capture_command, "tcpdump");
        assert_eq!(parsed.log_retention_days, 7);
    }

    #[test]
    fn test_config_dir_does_not_panic() {
        let dir = config_dir();
        assert!(dir.ends_with(".packetdeck"));
    }
}
