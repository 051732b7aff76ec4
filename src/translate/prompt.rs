use super::interface::{ChatCompletionRequest, ChatMessage};

/// Instruction sent to the model. The model must answer with a bare JSON
/// object so the content can be decoded as a `TranslationPayload`.
pub fn translation_prompt(from_language: &str, to_language: &str, text: &str) -> String {
    format!(
        "Translate this text from {from_language} to {to_language}: \"{text}\"\n\
         \n\
         Respond with ONLY valid JSON in this format:\n\
         {{\"translated_text\": \"your translation here\"}}\n\
         \n\
         Do not add any explanations, markdown, or extra text."
    )
}

pub fn completion_request<'a>(model: &'a str, prompt: String) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model,
        messages: vec![ChatMessage {
            role: "user",
            content: prompt,
        }],
    }
}
