//! Session lifecycle and the per-submission pipeline.
//!
//! A [`ChatSession`] is the explicit context struct for one user session:
//! the ordered turn history, the running usage totals, the attached
//! conversational memory, and the selected model. Each submission runs
//! end-to-end (window selection, prompt assembly, remote call, sanitize,
//! state update) before the next one is accepted; the remote call blocks.

use crate::client::{ChatBackend, ClientError, ModelId};
use crate::memory::ConversationMemory;
use crate::prompt::{default_few_shot, sanitize_response, PromptAssembler};
use crate::types::Turn;
use crate::usage::{estimate, UsageEstimate, UsageTotals};
use crate::window::select_window;

/// Fixed assistant reply appended when the remote call fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, I can't handle your request right now. Please try again later.";

/// Per-request options, supplied by the caller and not persisted.
#[derive(Debug, Clone, Copy)]
pub struct SubmitOptions {
    /// Bound on the number of prior user/assistant pairs in the window.
    pub max_pairs: usize,
    /// Whether to inject the bundled few-shot examples (structured mode).
    pub few_shot: bool,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            max_pairs: 5,
            few_shot: false,
        }
    }
}

/// What one submission produced.
#[derive(Debug)]
pub struct TurnOutcome {
    /// The assistant text appended to the conversation (sanitized reply,
    /// or the fixed fallback on failure).
    pub reply: String,
    /// Usage added to the totals; `None` when the call failed.
    pub usage: Option<UsageEstimate>,
    /// The underlying error, kept for diagnostics.
    pub error: Option<ClientError>,
}

impl TurnOutcome {
    /// True when the reply is the fallback text rather than model output.
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// All state owned by one user session.
#[derive(Debug)]
pub struct ChatSession {
    conversation: Vec<Turn>,
    totals: UsageTotals,
    memory: Option<ConversationMemory>,
    model: ModelId,
}

impl ChatSession {
    /// Create an empty session bound to the given model.
    pub fn new(model: ModelId) -> Self {
        Self {
            conversation: Vec::new(),
            totals: UsageTotals::new(),
            memory: None,
            model,
        }
    }

    /// The full turn history, oldest first.
    pub fn conversation(&self) -> &[Turn] {
        &self.conversation
    }

    /// Running usage totals.
    pub fn totals(&self) -> &UsageTotals {
        &self.totals
    }

    /// The currently selected model.
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// The attached conversational memory, if one has been built.
    pub fn memory(&self) -> Option<&ConversationMemory> {
        self.memory.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.conversation.is_empty()
    }

    /// Switch the selected model. The attached memory is unset so it is
    /// rebuilt against the new backend; visible history and totals are
    /// kept. Re-selecting the current model is a no-op.
    pub fn set_model(&mut self, model: ModelId) {
        if model != self.model {
            self.model = model;
            self.memory = None;
        }
    }

    /// Reset the session: conversation, totals, and memory together, in
    /// one transition. There is no partial clear.
    pub fn clear(&mut self) {
        self.conversation.clear();
        self.totals.reset();
        self.memory = None;
    }

    /// Process one user submission end-to-end.
    ///
    /// The user turn is appended first; the window is selected from the
    /// turns preceding it. On success the sanitized reply is appended and
    /// totals accumulate. On failure exactly one assistant turn with
    /// [`FALLBACK_REPLY`] is appended and totals and memory are left
    /// untouched, so stored turns are never corrupted.
    pub fn submit(
        &mut self,
        input: &str,
        backend: &dyn ChatBackend,
        opts: &SubmitOptions,
    ) -> TurnOutcome {
        self.conversation.push(Turn::user(input));

        let assembler = if opts.few_shot {
            PromptAssembler::default().with_few_shot(default_few_shot())
        } else {
            PromptAssembler::default()
        };

        let prior = &self.conversation[..self.conversation.len() - 1];
        let window = select_window(prior, opts.max_pairs);
        let payload = assembler.assemble(opts.few_shot, window, input);

        match backend.complete(&payload) {
            Ok(raw) => {
                let usage = estimate(payload.char_len(), raw.chars().count());
                let reply = sanitize_response(&raw, input);

                self.totals.add(usage);
                self.conversation.push(Turn::assistant(reply.clone()));
                self.memory
                    .get_or_insert_with(ConversationMemory::new)
                    .add_exchange(input, &reply);

                TurnOutcome {
                    reply,
                    usage: Some(usage),
                    error: None,
                }
            }
            Err(err) => {
                self.conversation.push(Turn::assistant(FALLBACK_REPLY));

                TurnOutcome {
                    reply: FALLBACK_REPLY.to_string(),
                    usage: None,
                    error: Some(err),
                }
            }
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(ModelId::Qwen)
    }
}
