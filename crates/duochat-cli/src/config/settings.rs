//! Configuration settings for the duochat CLI

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Model settings
    pub model: ModelConfig,
    /// Chat behavior settings
    pub chat: ChatConfig,
}

/// Model settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Default model to use: "qwen" or "deepseek"
    pub default: String,
}

/// Chat behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    /// How many prior user/assistant pairs to keep in the window (1-10)
    pub max_pairs: usize,
    /// Whether few-shot examples are injected into prompts
    pub few_shot: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            default: "qwen".to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_pairs: 5,
            few_shot: false,
        }
    }
}

/// Errors that can occur during configuration operations
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to find config directory
    NoConfigDir,
    /// Failed to read config file
    ReadError(std::io::Error),
    /// Failed to write config file
    WriteError(std::io::Error),
    /// Failed to parse TOML
    ParseError(toml::de::Error),
    /// Failed to serialize TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::ReadError(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::WriteError(e) => write!(f, "Failed to write config file: {}", e),
            ConfigError::ParseError(e) => write!(f, "Failed to parse config file: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Failed to serialize config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError(e) => Some(e),
            ConfigError::WriteError(e) => Some(e),
            ConfigError::ParseError(e) => Some(e),
            ConfigError::SerializeError(e) => Some(e),
            _ => None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("duochat").join("config.toml"))
    }

    /// Load config from the default path, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path, creating default if it doesn't exist
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        Self::parse(&contents)
    }

    /// Parse config from a TOML string
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        // Parse TOML and merge with defaults so partial configs work
        let partial: toml::Value = toml::from_str(contents).map_err(ConfigError::ParseError)?;

        let default = Config::default();
        let default_value = toml::Value::try_from(&default).map_err(ConfigError::SerializeError)?;

        let merged = merge_toml_values(default_value, partial);

        merged.try_into().map_err(ConfigError::ParseError)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
        }

        let contents = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        fs::write(path, contents).map_err(ConfigError::WriteError)
    }
}

/// Merge two TOML values, with the second taking precedence
fn merge_toml_values(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_value) in overlay_table {
                let merged_value = if let Some(base_value) = base_table.remove(&key) {
                    merge_toml_values(base_value, overlay_value)
                } else {
                    overlay_value
                };
                base_table.insert(key, merged_value);
            }
            toml::Value::Table(base_table)
        }
        // For non-table values, overlay takes precedence
        (_, overlay) => overlay,
    }
}
