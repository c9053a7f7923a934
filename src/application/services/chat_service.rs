use std::sync::Arc;

use crate::application::ports::{DocumentStore, DocumentStoreError, LlmClient, LlmClientError};
use crate::domain::{ChatTurn, DocumentId};

use super::OVERLOADED_MESSAGE;

/// Conversational flow over a previously uploaded document. The original
/// bytes go to the provider alongside the caller's history; no text
/// extraction happens on this path.
pub struct ChatService<L>
where
    L: LlmClient,
{
    document_store: Arc<dyn DocumentStore>,
    llm_client: Arc<L>,
}

impl<L> ChatService<L>
where
    L: LlmClient,
{
    pub fn new(document_store: Arc<dyn DocumentStore>, llm_client: Arc<L>) -> Self {
        Self {
            document_store,
            llm_client,
        }
    }

    /// Answers a follow-up question about a stored document. The handle is
    /// resolved before any remote call is attempted; the caller-supplied
    /// history goes to the provider unmodified and in order.
    #[tracing::instrument(
        skip(self, message, history),
        fields(document_id = %document_id.as_uuid(), history_len = history.len())
    )]
    pub async fn chat(
        &self,
        document_id: DocumentId,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, ChatError> {
        let stored = self
            .document_store
            .get(document_id)
            .await?
            .ok_or(ChatError::DocumentNotFound(document_id))?;

        match self
            .llm_client
            .generate_chat_turn(history, &stored, message)
            .await
        {
            Ok(reply) => Ok(reply),
            Err(e) => {
                tracing::warn!(error = %e, "chat completion failed");
                Ok(render_provider_failure(&e))
            }
        }
    }
}

fn render_provider_failure(error: &LlmClientError) -> String {
    match error {
        LlmClientError::Overloaded => OVERLOADED_MESSAGE.to_string(),
        other => format!("Failed to get a response from the AI service. Details: {other}"),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("document {} not found", .0.as_uuid())]
    DocumentNotFound(DocumentId),
    #[error("document store: {0}")]
    Store(#[from] DocumentStoreError),
}
