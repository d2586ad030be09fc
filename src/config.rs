//! refactor-extras configuration management.
//!
//! Handles the configuration file at:
//! - Linux: ~/.config/refactor-extras/config.toml
//! - macOS: ~/Library/Application Support/refactor-extras/config.toml
//! - Windows: %APPDATA%\refactor-extras\config.toml

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RefactorError, Result};
use crate::markup::SerializeOptions;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "REFACTOR_EXTRAS_CONFIG";

/// refactor-extras configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExtrasConfig {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// File insertion settings
    #[serde(default)]
    pub insert: InsertConfig,

    /// Reference markup settings
    #[serde(default)]
    pub markup: MarkupConfig,

    /// Extension to language id overrides
    #[serde(default)]
    pub languages: HashMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

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

/// Insert-file configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsertConfig {
    /// Files larger than this many bytes need confirmation
    #[serde(default = "default_large_file_threshold")]
    pub large_file_threshold: u64,
}

fn default_large_file_threshold() -> u64 {
    2 * 1024 * 1024
}

impl Default for InsertConfig {
    fn default() -> Self {
        Self {
            large_file_threshold: default_large_file_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkupConfig {
    /// Write `<link ... />` instead of `<link ...>`
    #[serde(default = "default_self_close")]
    pub self_close_void_tags: bool,
}

fn default_self_close() -> bool {
    true
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            self_close_void_tags: default_self_close(),
        }
    }
}

impl MarkupConfig {
    pub fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            self_close_void_tags: self.self_close_void_tags,
        }
    }
}

impl ExtrasConfig {
    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("refactor-extras").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default path
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| RefactorError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| RefactorError::ConfigError {
            message: format!("Failed to parse config: {}", e),
        })?;

        // Keys are matched against lower-cased extensions without the dot
        config.languages = config
            .languages
            .into_iter()
            .map(|(ext, id)| (ext.trim_start_matches('.').to_lowercase(), id))
            .collect();

        Ok(config)
    }
}
