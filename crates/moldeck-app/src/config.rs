//! Deck configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {0}: {1}")]
    Io(String, String),
    #[error("failed to parse config {0}: {1}")]
    Parse(String, String),
}

/// How to reach the external viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Viewer executable to spawn. `None` runs the deck in dry-run mode,
    /// logging every script instead of sending it.
    pub command: Option<String>,
    /// Extra arguments for the viewer executable.
    pub args: Vec<String>,
    /// Applet target id the deck's controls address.
    pub target: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            target: "0".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub viewer: ViewerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "MolDeck".to_string(),
            width: 480.0,
            height: 400.0,
            viewer: ViewerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file, falling back to defaults when the file is
    /// missing. A malformed file is an error, not a silent default.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;
        serde_json::from_str(&raw)
            .map_err(|e| ConfigError::Parse(path.display().to_string(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.title, "MolDeck");
        assert_eq!(config.viewer.target, "0");
        assert!(config.viewer.command.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moldeck.json");
        fs::write(&path, r#"{"title":"Bench","viewer":{"command":"viewer"}}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.title, "Bench");
        assert_eq!(config.viewer.command.as_deref(), Some("viewer"));
        assert_eq!(config.viewer.target, "0");
        assert_eq!(config.width, 480.0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moldeck.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse(..))));
    }
}
