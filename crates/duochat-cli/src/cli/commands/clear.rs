//! The /clear command - resets the session in one step

use super::{Command, CommandContext, CommandResult};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clear the conversation, usage totals, and memory"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandResult {
        ctx.session.clear();
        CommandResult::Output("Session cleared.".to_string())
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
            Ok("reply".to_string())
        }
    }

    #[test]
    fn test_clear_command_name() {
        let cmd = ClearCommand;
        assert_eq!(cmd.name(), "clear");
    }

    #[test]
    fn test_clear_resets_session_atomically() {
        let cmd = ClearCommand;
        let (mut session, mut options) = test_support::fixture();
        session.submit("hello", &OkBackend, &options);
        assert!(!session.is_empty());

        let result = {
            let mut ctx = CommandContext {
                session: &mut session,
                options: &mut options,
                registry: CommandRegistry::with_defaults(),
            };
            cmd.execute(&[], &mut ctx)
        };

        assert!(matches!(result, CommandResult::Output(_)));
        assert!(session.is_empty());
        assert!(session.totals().is_zero());
        assert!(session.memory().is_none());
    }
}
