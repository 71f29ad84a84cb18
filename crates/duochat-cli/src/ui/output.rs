//! Styled output functions for the duochat CLI

use console::style;
use std::io::{self, Write};

/// Styled output writer
#[derive(Debug, Clone, Copy, Default)]
pub struct StyledOutput;

impl StyledOutput {
    pub fn new() -> Self {
        Self
    }

    /// The inline prompt shown before reading user input.
    pub fn user_prompt(&self) -> String {
        format!("{}: ", style("You").blue().bold())
    }

    /// Print an assistant reply, labeled with the model name.
    pub fn assistant(&self, model: &str, text: &str) {
        println!("{}: {}", style(model).yellow().bold(), text);
    }

    /// Print an error message (red)
    pub fn error(&self, text: &str) {
        eprintln!("{}", style(text).red());
    }

    /// Print muted/secondary text (dim)
    pub fn muted(&self, text: &str) {
        println!("{}", style(text).dim());
    }

    /// Print plain informational text
    pub fn info(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a separator line
    pub fn separator(&self) {
        println!("{}", style("─".repeat(50).as_str()).dim());
    }

    /// Print an empty line
    pub fn newline(&self) {
        println!();
    }

    /// Flush stdout
    pub fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}
