//! duochat CLI library
//!
//! Provides the REPL, slash commands, configuration, and styled output for
//! the duochat terminal client.

pub mod cli;
pub mod config;
pub mod ui;

pub use cli::{Repl, ReplConfig};
pub use config::Config;
pub use ui::StyledOutput;
