use thiserror::Error;

pub type TranslateResult<T> = Result<T, TranslateError>;

/// Failure kinds of a single translation call. None of them are retried.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("failed to reach completion endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion endpoint returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("failed to parse completion response: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),
    #[error("empty model response: no choices returned")]
    EmptyResponse,
    #[error("malformed translation payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}

impl TranslateError {
    /// Short stable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Upstream { .. } => "upstream_status",
            Self::InvalidEnvelope(_) => "invalid_envelope",
            Self::EmptyResponse => "empty_response",
            Self::MalformedPayload(_) => "malformed_payload",
        }
    }
}
