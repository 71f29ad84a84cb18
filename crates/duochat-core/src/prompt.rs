//! Prompt assembly and response sanitization.
//!
//! The assembler serializes a system instruction, optional few-shot
//! examples, a selected history window, and the new user turn into the
//! payload sent to the model. Two forms are supported: a single flat text
//! prompt and a structured role-tagged message list. Assembly is pure;
//! identical inputs produce byte-identical payloads.

use crate::types::{ChatMessage, Turn};

/// System instruction used when the caller does not supply one.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a professional, friendly and helpful AI assistant.
Answer questions directly and keep your answers concise.
If you do not know the answer, say so honestly instead of making something up.
Do not use markers like {input} or {output} in your answers.";

/// Placeholder the model may echo back in place of the user's input.
const INPUT_PLACEHOLDER: &str = "{input}";
/// Placeholder the model may echo back around its own output.
const OUTPUT_PLACEHOLDER: &str = "{output}";

/// A fixed input/output pair injected into the prompt to steer style.
/// Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FewShotExample {
    pub input: String,
    pub output: String,
}

impl FewShotExample {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// The static few-shot set bundled with the assembler.
pub fn default_few_shot() -> Vec<FewShotExample> {
    vec![
        FewShotExample::new(
            "What is the capital of France?",
            "The capital of France is Paris.",
        ),
        FewShotExample::new(
            "Summarize photosynthesis in one sentence.",
            "Photosynthesis is the process by which plants use sunlight to \
             turn carbon dioxide and water into sugar and oxygen.",
        ),
    ]
}

/// The exact payload handed to a chat backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPayload {
    /// A single concatenated text prompt.
    Flat(String),
    /// An ordered list of role-tagged messages.
    Messages(Vec<ChatMessage>),
}

impl PromptPayload {
    /// Character length of the prompt content, for the usage estimator.
    /// Counts Unicode scalar values, not bytes.
    pub fn char_len(&self) -> usize {
        match self {
            PromptPayload::Flat(text) => text.chars().count(),
            PromptPayload::Messages(messages) => {
                messages.iter().map(|m| m.content.chars().count()).sum()
            }
        }
    }
}

/// Builds prompts from a system instruction, an optional few-shot set,
/// a history window, and the new user input.
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    system: String,
    few_shot: Option<Vec<FewShotExample>>,
}

impl PromptAssembler {
    /// Create an assembler with the given system instruction and no
    /// few-shot examples.
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            few_shot: None,
        }
    }

    /// Attach a few-shot example set.
    pub fn with_few_shot(mut self, examples: Vec<FewShotExample>) -> Self {
        self.few_shot = Some(examples);
        self
    }

    /// The system instruction this assembler was built with.
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Whether a few-shot set is attached.
    pub fn has_few_shot(&self) -> bool {
        self.few_shot.is_some()
    }

    /// Assemble a flat text prompt.
    ///
    /// The system instruction always comes first and the new input always
    /// comes last, followed by the `Assistant: ` completion cue.
    pub fn flat(&self, history: &[Turn], new_input: &str) -> String {
        let mut prompt = format!("{}\n\n", self.system);

        if let Some(examples) = &self.few_shot {
            for example in examples {
                prompt.push_str(&format!("User: {}\n", example.input));
                prompt.push_str(&format!("Assistant: {}\n", example.output));
            }
        }

        for turn in history {
            prompt.push_str(&format!("{}: {}\n", turn.role.label(), turn.text));
        }

        prompt.push_str(&format!("User: {}\nAssistant: ", new_input));
        prompt
    }

    /// Assemble a structured message list: system message, few-shot pairs
    /// (when attached) immediately after it, the history window, then the
    /// new input as the final user message.
    pub fn messages(&self, history: &[Turn], new_input: &str) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(&self.system)];

        if let Some(examples) = &self.few_shot {
            for example in examples {
                messages.push(ChatMessage::user(&example.input));
                messages.push(ChatMessage::assistant(&example.output));
            }
        }

        for turn in history {
            messages.push(ChatMessage::from_turn(turn));
        }

        messages.push(ChatMessage::user(new_input));
        messages
    }

    /// Assemble into the requested payload form.
    pub fn assemble(&self, structured: bool, history: &[Turn], new_input: &str) -> PromptPayload {
        if structured {
            PromptPayload::Messages(self.messages(history, new_input))
        } else {
            PromptPayload::Flat(self.flat(history, new_input))
        }
    }
}

impl Default for PromptAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}

/// Clean template markers the model may have echoed verbatim: every literal
/// `{input}` becomes the original user input, every literal `{output}` is
/// removed. Applies to returned completions, not to prompts.
pub fn sanitize_response(text: &str, original_input: &str) -> String {
    text.replace(INPUT_PLACEHOLDER, original_input)
        .replace(OUTPUT_PLACEHOLDER, "")
}
