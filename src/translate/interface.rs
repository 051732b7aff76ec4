/// Wire types for the translate endpoint and the remote chat-completion API

use serde::{Deserialize, Serialize};

/// Inbound `POST /translate` body. All three fields are required and must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub from_language: String,
    pub to_language: String,
}

impl TranslateRequest {
    pub fn is_complete(&self) -> bool {
        !self.text.is_empty() && !self.from_language.is_empty() && !self.to_language.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// Outer envelope returned by the completion endpoint.
#[derive(Debug, Deserialize)]
pub struct CompletionEnvelope {
    /// Missing and `null` both mean no choices.
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// The JSON object the model is instructed to put in its message content.
#[derive(Debug, Deserialize)]
pub struct TranslationPayload {
    pub translated_text: String,
}

/// OpenAI-style error body, `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
pub struct UpstreamErrorBody {
    pub error: UpstreamErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamErrorDetail {
    pub message: String,
}
