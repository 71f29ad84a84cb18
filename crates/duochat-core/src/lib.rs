// Core chat-session modules
pub mod client;
pub mod memory;
pub mod prompt;
pub mod session;
pub mod types;
pub mod usage;
pub mod window;

// Re-export commonly used types
pub use client::{ChatBackend, ClientError, CompletionValue, HttpChatClient, ModelId};
pub use memory::ConversationMemory;
pub use prompt::{
    default_few_shot, sanitize_response, FewShotExample, PromptAssembler, PromptPayload,
    DEFAULT_SYSTEM_PROMPT,
};
pub use session::{ChatSession, SubmitOptions, TurnOutcome, FALLBACK_REPLY};
pub use types::{ChatMessage, Role, Turn};
pub use usage::{estimate, UsageEstimate, UsageTotals};
pub use window::select_window;
