use async_trait::async_trait;

use crate::domain::{ChatTurn, StoredDocument};

/// The single outbound channel to the remote generative-AI provider.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single-turn generation, used for one-shot analysis.
    async fn generate_once(&self, prompt: &str) -> Result<String, LlmClientError>;

    /// Opens a fresh chat context seeded with `history`, then submits the
    /// document content and the new user message as one turn.
    async fn generate_chat_turn(
        &self,
        history: &[ChatTurn],
        document: &StoredDocument,
        message: &str,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// Rate-limit retries were exhausted without a successful attempt.
    #[error("service overloaded after retries")]
    Overloaded,
}
