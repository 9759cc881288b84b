// src/config.rs
//! Decoder configuration stored as JSON under the user's config directory

use crate::display::OutputFormat;
use crate::error::{NmeaError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub output: OutputFormat,
    /// Fail the run when any sentence does not decode
    pub strict: bool,
    /// Passes over the sentence set when benchmarking
    pub bench_iterations: Option<u32>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            strict: false,
            bench_iterations: None,
        }
    }
}

impl DecoderConfig {
    /// Load configuration from the default location, falling back to defaults
    /// when no file exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| NmeaError::Config(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| NmeaError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(config_path, contents)?;

        Ok(())
    }

    /// `$HOME/.config/nmea-decode/config.json`
    pub fn get_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| NmeaError::Config("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home).join(".config").join("nmea-decode").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("nmea-decode-test-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::default();
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.strict);
        assert_eq!(config.bench_iterations, None);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let path = scratch_path("missing");
        assert_eq!(DecoderConfig::load_from(&path).unwrap(), DecoderConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch_path("roundtrip");
        let config = DecoderConfig {
            output: OutputFormat::Json,
            strict: true,
            bench_iterations: Some(500),
        };
        config.save_to(&path).unwrap();
        assert_eq!(DecoderConfig::load_from(&path).unwrap(), config);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: DecoderConfig = serde_json::from_str(r#"{"output":"json"}"#).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.strict);
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let path = scratch_path("dir");
        // a directory where the file should be
        std::fs::create_dir_all(&path).unwrap();
        assert!(matches!(DecoderConfig::load_from(&path), Err(NmeaError::Io(_))));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let path = scratch_path("bad");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(DecoderConfig::load_from(&path), Err(NmeaError::Config(_))));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
