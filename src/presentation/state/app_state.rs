use std::sync::Arc;

use crate::application::ports::{DocumentStore, FileLoader, LlmClient};
use crate::application::services::{AnalysisService, ChatService};

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub analysis_service: Arc<AnalysisService<F, L>>,
    pub chat_service: Arc<ChatService<L>>,
    pub document_store: Arc<dyn DocumentStore>,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            chat_service: Arc::clone(&self.chat_service),
            document_store: Arc::clone(&self.document_store),
        }
    }
}
