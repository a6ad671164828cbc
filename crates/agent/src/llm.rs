use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// A single structured-output completion.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    /// Schema the model's JSON answer must follow.
    pub response_schema: Value,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LlmError {
    #[error("transport failure: {0}")]
    TransportFailure(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("empty response")]
    EmptyResponse,
}

impl LlmError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TransportFailure(_) => "transport_failure",
            Self::MalformedResponse(_) => "malformed_response",
            Self::EmptyResponse => "empty_response",
        }
    }
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the raw text the model produced for `request`.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

/// Client for kiosks running without a model credential. Every call fails,
/// so callers always take their local fallback.
#[derive(Clone, Debug, Default)]
pub struct OfflineClient;

#[async_trait]
impl LlmClient for OfflineClient {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
        Err(LlmError::TransportFailure("offline provider configured".to_string()))
    }
}
