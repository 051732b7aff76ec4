use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::error::{TranslateError, TranslateResult};
use super::interface::{ChatCompletionRequest, UpstreamErrorBody};
use crate::config::OpenRouterConfig;

/// A remote chat-completion endpoint.
///
/// Implementations perform exactly one call and hand back the raw response
/// body; decoding is left to the caller.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &ChatCompletionRequest<'_>) -> TranslateResult<String>;
}

/// OpenRouter (or any OpenAI-compatible) `/chat/completions` client
pub struct OpenRouterClient {
    client: Client,
    url: String,
    api_key: String,
}

impl OpenRouterClient {
    pub fn new(config: &OpenRouterConfig) -> Self {
        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        info!("Initialized OpenRouterClient: url={}, model={}", url, config.model);
        Self {
            client: Client::new(),
            url,
            api_key: config.api_key.clone(),
        }
    }

    #[cfg(test)]
    fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionBackend for OpenRouterClient {
    async fn complete(&self, request: &ChatCompletionRequest<'_>) -> TranslateResult<String> {
        debug!("POST {} model={}", self.url, request.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TranslateError::Upstream {
                status: status.as_u16(),
                message: upstream_error_message(&body),
            });
        }

        Ok(body)
    }
}

fn upstream_error_message(body: &str) -> String {
    match serde_json::from_str::<UpstreamErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_string(),
    }
}
