use async_trait::async_trait;

use crate::domain::Document;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    /// The document parsed fine but yielded no text at all, e.g. a scanned
    /// image PDF. A business outcome, not a malfunction.
    #[error("no extractable text in {0}")]
    NoTextFound(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
