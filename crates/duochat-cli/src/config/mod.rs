//! Configuration management for the duochat CLI

mod settings;

pub use settings::{ChatConfig, Config, ConfigError, ModelConfig};
