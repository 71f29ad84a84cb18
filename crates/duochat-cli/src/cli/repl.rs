//! REPL (Read-Eval-Print Loop) for the duochat CLI
//!
//! Implements the main loop: read a line, dispatch slash commands, or run
//! a chat turn end-to-end against the selected backend. Each turn blocks
//! until the remote call completes or fails; there is no cancellation.

use super::commands::{parse_command, CommandContext, CommandRegistry, CommandResult};
use crate::ui::StyledOutput;
use duochat_core::{ChatSession, HttpChatClient, ModelId, SubmitOptions, UsageTotals};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Whether to show verbose output
    pub verbose: bool,
    /// Model selected at startup
    pub model: ModelId,
    /// Initial per-request options (window bound, few-shot toggle)
    pub options: SubmitOptions,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            model: ModelId::Qwen,
            options: SubmitOptions::default(),
        }
    }
}

/// The main REPL loop
pub struct Repl {
    config: ReplConfig,
    registry: CommandRegistry,
    session: ChatSession,
    options: SubmitOptions,
    output: StyledOutput,
}

impl Repl {
    /// Create a new REPL with the given configuration
    pub fn new(config: ReplConfig) -> Self {
        let session = ChatSession::new(config.model);
        let options = config.options;

        Self {
            config,
            registry: CommandRegistry::with_defaults(),
            session,
            options,
            output: StyledOutput::new(),
        }
    }

    /// Get the current session
    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Run the loop until /exit or EOF
    pub fn run(&mut self) -> Result<(), String> {
        if self.config.verbose {
            eprintln!(
                "[verbose] Starting chat session (model: {}, window: {} pairs)",
                self.session.model().name(),
                self.options.max_pairs
            );
        }
        self.output.info(&format!(
            "Chat with {} (/help for commands, /exit to quit)",
            self.session.model().name()
        ));

        let stdin = io::stdin();
        let mut reader = stdin.lock();

        loop {
            print!("{}", self.output.user_prompt());
            io::stdout().flush().ok();

            let mut input = String::new();
            match reader.read_line(&mut input) {
                Ok(0) => break, // EOF
                Ok(_) => {}
                Err(_) => break,
            }

            let input = input.trim();
            if input.is_empty() {
                if self.config.verbose {
                    eprintln!("[verbose] Skipping empty message");
                }
                continue;
            }

            if let Some((name, args)) = parse_command(input) {
                match self.dispatch(name, &args) {
                    CommandResult::Continue => {}
                    CommandResult::Exit => break,
                    CommandResult::Output(msg) => self.output.info(&msg),
                    CommandResult::Error(msg) => self.output.error(&msg),
                }
                continue;
            }

            self.chat_turn(input);
        }

        if self.config.verbose {
            eprintln!("[verbose] Chat session ended");
        }
        Ok(())
    }

    /// Execute one slash command
    fn dispatch(&mut self, name: &str, args: &[&str]) -> CommandResult {
        match self.registry.get(name) {
            Some(cmd) => {
                let mut ctx = CommandContext {
                    session: &mut self.session,
                    options: &mut self.options,
                    registry: self.registry.clone(),
                };
                cmd.execute(args, &mut ctx)
            }
            None => CommandResult::Error(format!(
                "Unknown command: /{}. Type /help for the list.",
                name
            )),
        }
    }

    /// Run one chat turn: resolve the client, submit, display.
    ///
    /// A missing credential is reported without touching the session, so
    /// no turn is appended for a request that never reached the remote.
    fn chat_turn(&mut self, input: &str) {
        let backend = match HttpChatClient::from_env(self.session.model()) {
            Ok(client) => client,
            Err(err) => {
                self.output.error(&format!("Configuration error: {}", err));
                return;
            }
        };

        if self.config.verbose {
            eprintln!(
                "[verbose] Submitting to {} (window: {} pairs, few-shot: {})",
                self.session.model().name(),
                self.options.max_pairs,
                self.options.few_shot
            );
        }

        let spinner = thinking_spinner();
        let outcome = self.session.submit(input, &backend, &self.options);
        spinner.finish_and_clear();

        if let Some(err) = &outcome.error {
            self.output.error(&format!("Error: {}", err));
        }
        self.output
            .assistant(self.session.model().name(), &outcome.reply);

        if let Some(usage) = outcome.usage {
            self.output.muted(&format!(
                "~{} tokens this turn ({} total, {})",
                usage.total_tokens,
                UsageTotals::format_tokens(self.session.totals().total_tokens()),
                UsageTotals::format_cost(self.session.totals().total_cost())
            ));
        }
    }
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("valid spinner template"),
    );
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
