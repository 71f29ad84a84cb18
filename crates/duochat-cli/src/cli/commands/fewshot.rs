//! The /fewshot command - toggle few-shot example injection

use super::{Command, CommandContext, CommandResult};

pub struct FewShotCommand;

impl Command for FewShotCommand {
    fn name(&self) -> &'static str {
        "fewshot"
    }

    fn description(&self) -> &'static str {
        "Toggle few-shot examples in the prompt"
    }

    fn usage(&self) -> &'static str {
        "/fewshot [on|off]"
    }

    fn execute(&self, args: &[&str], ctx: &mut CommandContext) -> CommandResult {
        let enabled = match args.first() {
            None => !ctx.options.few_shot,
            Some(&"on") => true,
            Some(&"off") => false,
            Some(other) => {
                return CommandResult::Error(format!("Expected \"on\" or \"off\", got: {}", other))
            }
        };

        ctx.options.few_shot = enabled;
        CommandResult::Output(format!(
            "Few-shot examples {}.",
            if enabled { "enabled" } else { "disabled" }
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{test_support, CommandRegistry};

    #[test]
    fn test_fewshot_toggle_without_args() {
        let cmd = FewShotCommand;
        let (mut session, mut options) = test_support::fixture();
        let mut ctx = CommandContext {
            session: &mut session,
            options: &mut options,
            registry: CommandRegistry::with_defaults(),
        };

        assert!(!ctx.options.few_shot);
        cmd.execute(&[], &mut ctx);
        assert!(ctx.options.few_shot);
        cmd.execute(&[], &mut ctx);
        assert!(!ctx.options.few_shot);
    }

    #[test]
    fn test_fewshot_explicit_on_off() {
        let cmd = FewShotCommand;
        let (mut session, mut options) = test_support::fixture();
        let mut ctx = CommandContext {
            session: &mut session,
            options: &mut options,
            registry: CommandRegistry::with_defaults(),
        };

        cmd.execute(&["on"], &mut ctx);
        assert!(ctx.options.few_shot);
        cmd.execute(&["off"], &mut ctx);
        assert!(!ctx.options.few_shot);
    }

    #[test]
    fn test_fewshot_rejects_other_args() {
        let cmd = FewShotCommand;
        let (mut session, mut options) = test_support::fixture();
        let mut ctx = CommandContext {
            session: &mut session,
            options: &mut options,
            registry: CommandRegistry::with_defaults(),
        };

        let result = cmd.execute(&["maybe"], &mut ctx);
        assert!(matches!(result, CommandResult::Error(_)));
    }
}
