//! Model client provider for the two hosted backends.
//!
//! Both Qwen (via DashScope's compatible mode) and DeepSeek expose an
//! OpenAI-compatible chat-completions endpoint, each gated by its own API
//! credential. The rest of the crate only consumes the [`ChatBackend`]
//! trait: submit a payload, get text back, or fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt::PromptPayload;
use crate::types::ChatMessage;

/// Sampling temperature used for both backends.
const TEMPERATURE: f64 = 0.7;

/// Errors raised by model selection, configuration, and remote calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The model name did not match a supported backend.
    #[error("unknown model: {0} (expected \"qwen\" or \"deepseek\")")]
    UnknownModel(String),
    /// The credential for the selected model is absent from the environment.
    #[error("missing credential for {model}: set the {var} environment variable")]
    MissingCredential {
        model: &'static str,
        var: &'static str,
    },
    /// The remote call failed (network, quota, non-2xx status).
    #[error("request to {model} failed: {detail}")]
    RequestFailed { model: &'static str, detail: String },
    /// The response body could not be read as JSON at all.
    #[error("could not read response from {model}: {detail}")]
    BadResponse { model: &'static str, detail: String },
}

impl ClientError {
    /// True for errors the user fixes by configuring the environment,
    /// as opposed to transient remote failures.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ClientError::UnknownModel(_) | ClientError::MissingCredential { .. }
        )
    }
}

/// The two supported model backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelId {
    Qwen,
    DeepSeek,
}

impl ModelId {
    /// All supported backends, in display order.
    pub fn all() -> [ModelId; 2] {
        [ModelId::Qwen, ModelId::DeepSeek]
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            ModelId::Qwen => "qwen",
            ModelId::DeepSeek => "deepseek",
        }
    }

    /// Model identifier sent on the wire.
    pub fn api_model(&self) -> &'static str {
        match self {
            ModelId::Qwen => "qwen-plus",
            ModelId::DeepSeek => "deepseek-chat",
        }
    }

    /// Environment variable holding the credential for this backend.
    pub fn env_var(&self) -> &'static str {
        match self {
            ModelId::Qwen => "DASHSCOPE_API_KEY",
            ModelId::DeepSeek => "DEEPSEEK_API_KEY",
        }
    }

    /// Base URL of the OpenAI-compatible endpoint.
    pub fn base_url(&self) -> &'static str {
        match self {
            ModelId::Qwen => "https://dashscope.aliyuncs.com/compatible-mode/v1",
            ModelId::DeepSeek => "https://api.deepseek.com/v1",
        }
    }

    /// Parse a model name, case-insensitively, accepting common aliases.
    pub fn from_name(name: &str) -> Result<Self, ClientError> {
        match name.to_lowercase().as_str() {
            "qwen" | "qwen-plus" | "tongyi" | "dashscope" => Ok(ModelId::Qwen),
            "deepseek" | "deepseek-chat" => Ok(ModelId::DeepSeek),
            _ => Err(ClientError::UnknownModel(name.to_string())),
        }
    }
}

/// The consumed model capability: submit a payload, receive generated text.
pub trait ChatBackend {
    /// Which backend this client is bound to.
    fn model(&self) -> ModelId;

    /// Execute one blocking completion request.
    fn complete(&self, payload: &PromptPayload) -> Result<String, ClientError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

/// The recognized shapes of a completion response body. Extraction is
/// total: anything that is not a chat-completion object or a plain string
/// is coerced to text as a last resort, so a text value always exists.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CompletionValue {
    /// A chat-completion object carrying its text in choices[0].message.
    Chat { choices: Vec<CompletionChoice> },
    /// A bare JSON string.
    Text(String),
    /// Anything else; rendered via string conversion.
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: ChatMessage,
}

impl CompletionValue {
    /// Extract the completion text. Never fails.
    pub fn into_text(self) -> String {
        match self {
            CompletionValue::Chat { choices } => choices
                .into_iter()
                .next()
                .map(|choice| choice.message.content)
                .unwrap_or_default(),
            CompletionValue::Text(text) => text,
            CompletionValue::Other(value) => value.to_string(),
        }
    }
}

/// Blocking HTTP client for one backend.
pub struct HttpChatClient {
    model: ModelId,
    api_key: String,
    base_url: String,
}

impl HttpChatClient {
    /// Create a client with an explicit credential.
    pub fn new(model: ModelId, api_key: impl Into<String>) -> Self {
        Self {
            model,
            api_key: api_key.into(),
            base_url: model.base_url().to_string(),
        }
    }

    /// Create a client using the credential from the environment,
    /// loading a `.env` file first if one is present.
    pub fn from_env(model: ModelId) -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();
        match std::env::var(model.env_var()) {
            Ok(key) if !key.is_empty() => Ok(Self::new(model, key)),
            _ => Err(ClientError::MissingCredential {
                model: model.name(),
                var: model.env_var(),
            }),
        }
    }

    /// Override the endpoint base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// A flat prompt goes over the wire as a single user message;
    /// structured payloads are sent as-is.
    fn wire_messages(payload: &PromptPayload) -> Vec<ChatMessage> {
        match payload {
            PromptPayload::Flat(text) => vec![ChatMessage::user(text.clone())],
            PromptPayload::Messages(messages) => messages.clone(),
        }
    }
}

impl ChatBackend for HttpChatClient {
    fn model(&self) -> ModelId {
        self.model
    }

    fn complete(&self, payload: &PromptPayload) -> Result<String, ClientError> {
        let request = CompletionRequest {
            model: self.model.api_model(),
            messages: Self::wire_messages(payload),
            temperature: TEMPERATURE,
        };

        let response = ureq::post(&format!("{}/chat/completions", self.base_url))
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(&request)
            .map_err(|e| ClientError::RequestFailed {
                model: self.model.name(),
                detail: e.to_string(),
            })?;

        let value: CompletionValue =
            response.into_json().map_err(|e| ClientError::BadResponse {
                model: self.model.name(),
                detail: e.to_string(),
            })?;

        Ok(value.into_text())
    }
}
