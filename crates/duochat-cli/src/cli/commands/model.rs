//! The /model command - show or switch the active model

use super::{Command, CommandContext, CommandResult};
use duochat_core::ModelId;

pub struct ModelCommand;

impl Command for ModelCommand {
    fn name(&self) -> &'static str {
        "model"
    }

    fn description(&self) -> &'static str {
        "Switch model (show current if no argument)"
    }

    fn usage(&self) -> &'static str {
        "/model [qwen|deepseek]"
    }

    fn execute(&self, args: &[&str], ctx: &mut CommandContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::Output(format_current_model(ctx.session.model()));
        }

        match ModelId::from_name(args[0]) {
            Ok(model) => {
                if model == ctx.session.model() {
                    return CommandResult::Output(format!("Already using {}.", model.name()));
                }
                ctx.session.set_model(model);
                CommandResult::Output(format!(
                    "Switched to {}. Conversation memory will be rebuilt; history and usage totals are kept.",
                    model.name()
                ))
            }
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }
}

/// Format the current model display
fn format_current_model(current: ModelId) -> String {
    let mut output = String::new();
    output.push_str(&format!("Current model: {}\n", current.name()));
    output.push_str("\nAvailable models:\n");
    for model in ModelId::all() {
        if model == current {
            output.push_str(&format!("  • {} ({}, current)\n", model.name(), model.api_model()));
        } else {
            output.push_str(&format!("  • {} ({})\n", model.name(), model.api_model()));
        }
    }
    output
}
