use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::application::prompts::build_analysis_prompt;
use crate::domain::{ContentType, Document};

use super::OVERLOADED_MESSAGE;

/// One-shot document analysis: extract text, wrap it in the analysis
/// template, and ask the provider for a structured report.
pub struct AnalysisService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
}

impl<F, L> AnalysisService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<L>) -> Self {
        Self {
            file_loader,
            llm_client,
        }
    }

    /// Runs the analysis flow. Extraction and provider failures come back as
    /// descriptive result text rather than errors, so the caller always has
    /// something to show.
    #[tracing::instrument(skip(self, data), fields(filename = %filename, bytes = data.len()))]
    pub async fn analyze(&self, data: &[u8], filename: &str) -> String {
        match self.try_analyze(data, filename).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(error = %e, "analysis did not produce a report");
                render_failure(&e)
            }
        }
    }

    async fn try_analyze(&self, data: &[u8], filename: &str) -> Result<String, AnalysisError> {
        let document = Document::new(filename.to_string(), ContentType::Pdf, data.len() as u64);

        // Text is re-derived on every call; analysis is not expected to be
        // repeated on the same document within a process lifetime.
        let text = self
            .file_loader
            .extract_text(data, &document)
            .await
            .map_err(AnalysisError::Extraction)?;

        let prompt = build_analysis_prompt(&text);

        let report = self
            .llm_client
            .generate_once(&prompt)
            .await
            .map_err(AnalysisError::Completion)?;

        tracing::info!(report_chars = report.len(), "analysis complete");
        Ok(report)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("extraction: {0}")]
    Extraction(FileLoaderError),
    #[error("completion: {0}")]
    Completion(LlmClientError),
}

fn render_failure(error: &AnalysisError) -> String {
    match error {
        AnalysisError::Extraction(FileLoaderError::NoTextFound(_)) => {
            "Could not extract any text from the document. The file may be empty or contain only images.".to_string()
        }
        AnalysisError::Extraction(FileLoaderError::ExtractionFailed(detail)) => {
            format!("Could not read the document. It might be corrupted or in an unsupported format. Details: {detail}")
        }
        AnalysisError::Extraction(FileLoaderError::UnsupportedContentType(mime)) => {
            format!("Unsupported document type: {mime}.")
        }
        AnalysisError::Completion(LlmClientError::Overloaded) => OVERLOADED_MESSAGE.to_string(),
        AnalysisError::Completion(e) => {
            format!("Failed to get an analysis from the AI service. Details: {e}")
        }
    }
}
