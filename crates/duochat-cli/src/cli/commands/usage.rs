//! The /usage command - shows the estimated token and cost totals

use super::{Command, CommandContext, CommandResult};

pub struct UsageCommand;

impl Command for UsageCommand {
    fn name(&self) -> &'static str {
        "usage"
    }

    fn description(&self) -> &'static str {
        "Show estimated token usage and cost for this session"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandResult {
        CommandResult::Output(ctx.session.totals().render_breakdown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{test_support, CommandRegistry};
    use duochat_core::{ChatBackend, ClientError, ModelId, PromptPayload};

    struct OkBackend;

    impl ChatBackend for OkBackend {
        fn model(&self) -> ModelId {
            ModelId::Qwen
        }

        fn complete(&self, _payload: &PromptPayload) -> Result<String, ClientError> {
            Ok("a reasonably sized reply".to_string())
        }
    }

    #[test]
    fn test_usage_command_name() {
        let cmd = UsageCommand;
        assert_eq!(cmd.name(), "usage");
    }

    #[test]
    fn test_usage_output_contains_breakdown() {
        let cmd = UsageCommand;
        let (mut session, mut options) = test_support::fixture();
        session.submit("hello", &OkBackend, &options);

        let mut ctx = CommandContext {
            session: &mut session,
            options: &mut options,
            registry: CommandRegistry::with_defaults(),
        };

        let result = cmd.execute(&[], &mut ctx);

        if let CommandResult::Output(output) = result {
            assert!(output.contains("Session Usage"));
            assert!(output.contains("Prompt tokens:"));
            assert!(output.contains("Completion tokens:"));
            assert!(output.contains("Total cost:"));
        } else {
            panic!("Expected CommandResult::Output");
        }
    }

    #[test]
    fn test_usage_shows_zero_when_empty() {
        let cmd = UsageCommand;
        let (mut session, mut options) = test_support::fixture();
        let mut ctx = CommandContext {
            session: &mut session,
            options: &mut options,
            registry: CommandRegistry::with_defaults(),
        };

        let result = cmd.execute(&[], &mut ctx);

        if let CommandResult::Output(output) = result {
            assert!(output.contains("$0.000000"));
        } else {
            panic!("Expected CommandResult::Output");
        }
    }
}
