use std::sync::Arc;

use tracing::{debug, warn};

use super::completion::{CompletionBackend, OpenRouterClient};
use super::error::{TranslateError, TranslateResult};
use super::interface::{CompletionEnvelope, TranslationPayload};
use super::prompt::{completion_request, translation_prompt};
use crate::config::Config;

/// Translation pipeline plus the language registry accessor.
///
/// Holds only read-only state, so one instance is shared by every request.
pub struct TranslatorService {
    config: Arc<Config>,
    backend: Arc<dyn CompletionBackend>,
}

impl TranslatorService {
    pub fn new(config: Arc<Config>) -> Self {
        let backend = Arc::new(OpenRouterClient::new(&config.openrouter));
        Self::with_backend(config, backend)
    }

    pub fn with_backend(config: Arc<Config>, backend: Arc<dyn CompletionBackend>) -> Self {
        Self { config, backend }
    }

    /// Translate `text` with one call to the completion endpoint.
    ///
    /// Language values are forwarded verbatim; they are not checked against
    /// the configured registry.
    pub async fn translate(
        &self,
        text: &str,
        from_language: &str,
        to_language: &str,
    ) -> TranslateResult<String> {
        let prompt = translation_prompt(from_language, to_language, text);
        let request = completion_request(&self.config.openrouter.model, prompt);

        let body = self.backend.complete(&request).await?;
        let content = decode_envelope(&body)?;
        let translated = decode_payload(&content)?;

        debug!(
            "Translated {} chars {} -> {}",
            text.chars().count(),
            from_language,
            to_language
        );
        Ok(translated)
    }

    /// Configured language codes in configured order. Empty is not an error.
    pub fn supported_languages(&self) -> Vec<String> {
        self.config.language_codes()
    }
}

/// First pass: the completion envelope. Returns the first choice's content.
fn decode_envelope(body: &str) -> TranslateResult<String> {
    let envelope: CompletionEnvelope =
        serde_json::from_str(body).map_err(TranslateError::InvalidEnvelope)?;

    let first = envelope
        .choices
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or(TranslateError::EmptyResponse)?;

    Ok(first.message.content.unwrap_or_default())
}

/// Second pass: the content the model was told to format as JSON.
fn decode_payload(content: &str) -> TranslateResult<String> {
    let payload: TranslationPayload = serde_json::from_str(content).map_err(|e| {
        warn!("Model did not follow the JSON format: {:?}", content);
        TranslateError::MalformedPayload(e)
    })?;
    Ok(payload.translated_text)
}
