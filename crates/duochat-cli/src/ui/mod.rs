//! UI components for the duochat CLI

mod output;

pub use output::StyledOutput;
