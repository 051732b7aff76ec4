// Stub completion endpoint and app builders shared by the integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use translator_api::config::{Config, Language, OpenRouterConfig, ServerConfig, TranslationConfig};
use translator_api::translate::{
    interface::ChatCompletionRequest, CompletionBackend, TranslateResult, TranslatorService,
};
use translator_api::{build_app, AppState};

/// A request seen by the stub upstream.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    delay: Duration,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// OpenAI-compatible `/chat/completions` stub bound to an ephemeral port.
pub struct StubUpstream {
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubUpstream {
    /// Responds 200 with an envelope whose first choice carries `content`.
    pub async fn with_content(content: &str) -> Self {
        let body = json!({
            "id": "gen-stub",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        });
        Self::start(StatusCode::OK, body.to_string()).await
    }

    pub async fn start(status: StatusCode, body: String) -> Self {
        Self::start_delayed(status, body, Duration::ZERO).await
    }

    /// Like `start`, but waits `delay` before answering.
    pub async fn start_delayed(status: StatusCode, body: String, delay: Duration) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            body,
            delay,
            calls: calls.clone(),
        };

        let app = Router::new()
            .route("/v1/chat/completions", post(completions))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/v1", addr),
            calls,
            handle,
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Drop for StubUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn completions(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };
    state.calls.lock().unwrap().push(RecordedCall {
        authorization: header("authorization"),
        content_type: header("content-type"),
        body,
    });
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, state.body.clone())
}

pub fn test_config(base_url: &str, languages: &[(&str, &str)]) -> Config {
    Config {
        server: ServerConfig::default(),
        openrouter: OpenRouterConfig {
            api_key: "sk-test-key".to_string(),
            base_url: base_url.to_string(),
            model: "test/model".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_delay: Duration::from_secs(1),
        },
        translation: TranslationConfig::default(),
        languages: languages
            .iter()
            .map(|(code, name)| Language {
                code: code.to_string(),
                name: name.to_string(),
            })
            .collect(),
    }
}

pub fn app_for(config: Config) -> Router {
    build_app(AppState::new(config))
}

/// In-process backend that answers with a fixed body and counts calls.
pub struct CannedBackend {
    body: String,
    calls: Mutex<usize>,
}

impl CannedBackend {
    pub fn new(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: body.to_string(),
            calls: Mutex::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl CompletionBackend for CannedBackend {
    async fn complete(&self, _request: &ChatCompletionRequest<'_>) -> TranslateResult<String> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.body.clone())
    }
}

/// Router around a translator that talks to `backend` instead of the network.
pub fn app_with_backend(config: Config, backend: Arc<CannedBackend>) -> Router {
    let config = Arc::new(config);
    let translator = TranslatorService::with_backend(config.clone(), backend);
    build_app(AppState::with_translator(config, translator))
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
