//! The /help command - lists all available commands

use super::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show available commands"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandResult {
        let mut output = String::from("Available commands:\n\n");

        let mut commands: Vec<_> = ctx.registry.commands().collect();
        commands.sort_by_key(|cmd| cmd.name());

        for cmd in commands {
            output.push_str(&format!("  /{:<12} {}\n", cmd.name(), cmd.description()));
        }

        output.push_str("\nAnything else is sent to the model as a chat message.");

        CommandResult::Output(output)
    }
}
