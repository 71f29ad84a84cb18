//! CLI module for duochat
//!
//! Entry point wiring: load configuration, resolve the startup model, and
//! hand control to the REPL.

pub mod commands;
mod repl;

pub use repl::{Repl, ReplConfig};

use crate::config::Config;
use duochat_core::{ModelId, SubmitOptions};

/// Run the CLI application
pub fn run(verbose: bool, model_override: Option<String>) -> Result<(), String> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}; using defaults", e);
            Config::default()
        }
    };

    let model = resolve_model(model_override, &config)?;

    let repl_config = ReplConfig {
        verbose,
        model,
        options: SubmitOptions {
            max_pairs: config.chat.max_pairs.clamp(1, 10),
            few_shot: config.chat.few_shot,
        },
    };

    if verbose {
        eprintln!("[verbose] Config loaded, starting REPL");
    }

    Repl::new(repl_config).run()
}

/// The --model flag wins over the configured default.
fn resolve_model(model_override: Option<String>, config: &Config) -> Result<ModelId, String> {
    let name = model_override.unwrap_or_else(|| config.model.default.clone());
    ModelId::from_name(&name).map_err(|e| e.to_string())
}
