//! Configuration file loading for the board editor.
//!
//! This module provides types and functions for loading editor settings
//! from a TOML file. Every setting has a default, so the file is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use board_analysis::EngineSettings;
use board_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Editor settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EditorConfig {
    /// Path to a UCI engine used for candidate moves.
    /// Defaults to "stockfish" (assumes it's in PATH).
    #[serde(default = "default_engine_path")]
    pub engine_path: String,
    /// Whether to query the engine after each analysis. Defaults to true.
    #[serde(default = "default_true")]
    pub engine_enabled: bool,
    /// Search depth for the engine. Defaults to 12.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Number of candidate moves to request. Defaults to 3.
    #[serde(default = "default_candidates")]
    pub candidates: u32,
    /// Time limit for one engine query in milliseconds. Defaults to 10000.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Program and arguments that receive FEN text on stdin,
    /// e.g. `["xclip", "-selection", "clipboard"]`.
    #[serde(default)]
    pub clipboard_command: Option<Vec<String>>,
    /// Side to move for a new session. Defaults to white.
    #[serde(default)]
    pub side: Color,
}

fn default_engine_path() -> String {
    "stockfish".to_string()
}

fn default_true() -> bool {
    true
}

fn default_depth() -> u32 {
    12
}

fn default_candidates() -> u32 {
    3
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            engine_path: default_engine_path(),
            engine_enabled: true,
            depth: default_depth(),
            candidates: default_candidates(),
            timeout_ms: default_timeout_ms(),
            clipboard_command: None,
            side: Color::White,
        }
    }
}

impl EditorConfig {
    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = toml::from_str(&content)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path: `board-editor.toml` in the
    /// current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("board-editor.toml")
    }

    /// Engine settings derived from this configuration.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            path: self.engine_path.clone(),
            depth: self.depth,
            candidates: self.candidates,
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = EditorConfig::load(Path::new("/nonexistent/board-editor.toml")).unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.engine_path, "stockfish");
        assert!(config.engine_enabled);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
engine_path = "/usr/games/stockfish"
depth = 18
side = "black"
clipboard_command = ["xclip", "-selection", "clipboard"]
"#
        )
        .unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.engine_path, "/usr/games/stockfish");
        assert_eq!(config.depth, 18);
        assert_eq!(config.side, Color::Black);
        assert_eq!(config.candidates, 3);
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(
            config.clipboard_command,
            Some(vec![
                "xclip".to_string(),
                "-selection".to_string(),
                "clipboard".to_string()
            ])
        );
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "depth = \"deep\"").unwrap();
        assert!(matches!(
            EditorConfig::load(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_engine_settings() {
        let config = EditorConfig {
            timeout_ms: 1500,
            candidates: 1,
            ..EditorConfig::default()
        };
        let settings = config.engine_settings();
        assert_eq!(settings.timeout, Duration::from_millis(1500));
        assert_eq!(settings.candidates, 1);
        assert_eq!(settings.depth, 12);
    }
}
