//! The /pairs command - bound on conversation pairs kept in the window

use super::{Command, CommandContext, CommandResult};

/// Range the original slider allowed.
const MIN_PAIRS: usize = 1;
const MAX_PAIRS: usize = 10;

pub struct PairsCommand;

impl Command for PairsCommand {
    fn name(&self) -> &'static str {
        "pairs"
    }

    fn description(&self) -> &'static str {
        "Set how many prior exchanges are sent with each message (1-10)"
    }

    fn usage(&self) -> &'static str {
        "/pairs [n]"
    }

    fn execute(&self, args: &[&str], ctx: &mut CommandContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::Output(format!(
                "Window bound: {} pair(s) of prior turns.",
                ctx.options.max_pairs
            ));
        }

        match args[0].parse::<usize>() {
            Ok(n) if (MIN_PAIRS..=MAX_PAIRS).contains(&n) => {
                ctx.options.max_pairs = n;
                CommandResult::Output(format!("Window bound set to {} pair(s).", n))
            }
            _ => CommandResult::Error(format!(
                "Expected a number between {} and {}, got: {}",
                MIN_PAIRS, MAX_PAIRS, args[0]
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{test_support, CommandRegistry};

    #[test]
    fn test_pairs_no_args_shows_current() {
        let cmd = PairsCommand;
        let (mut session, mut options) = test_support::fixture();
        let mut ctx = CommandContext {
            session: &mut session,
            options: &mut options,
            registry: CommandRegistry::with_defaults(),
        };

        let result = cmd.execute(&[], &mut ctx);

        if let CommandResult::Output(output) = result {
            assert!(output.contains("5"));
        } else {
            panic!("Expected CommandResult::Output");
        }
    }

    #[test]
    fn test_pairs_sets_value() {
        let cmd = PairsCommand;
        let (mut session, mut options) = test_support::fixture();

        let result = {
            let mut ctx = CommandContext {
                session: &mut session,
                options: &mut options,
                registry: CommandRegistry::with_defaults(),
            };
            cmd.execute(&["3"], &mut ctx)
        };

        assert!(matches!(result, CommandResult::Output(_)));
        assert_eq!(options.max_pairs, 3);
    }

    #[test]
    fn test_pairs_rejects_out_of_range() {
        let cmd = PairsCommand;
        let (mut session, mut options) = test_support::fixture();
        let mut ctx = CommandContext {
            session: &mut session,
            options: &mut options,
            registry: CommandRegistry::with_defaults(),
        };

        assert!(matches!(cmd.execute(&["0"], &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd.execute(&["11"], &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd.execute(&["abc"], &mut ctx), CommandResult::Error(_)));
        assert_eq!(ctx.options.max_pairs, 5);
    }
}
