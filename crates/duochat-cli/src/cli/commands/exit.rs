//! The /exit command - leaves the REPL

use super::{Command, CommandContext, CommandResult};

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit duochat"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext) -> CommandResult {
        CommandResult::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{test_support, CommandRegistry};

    #[test]
    fn test_exit_command_returns_exit() {
        let cmd = ExitCommand;
        let (mut session, mut options) = test_support::fixture();
        let mut ctx = CommandContext {
            session: &mut session,
            options: &mut options,
            registry: CommandRegistry::with_defaults(),
        };

        let result = cmd.execute(&[], &mut ctx);
        assert_eq!(result, CommandResult::Exit);
    }
}
