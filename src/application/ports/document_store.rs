use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{Document, DocumentId, StoredDocument};

/// Process-lifetime mapping from document handle to stored content. Kept
/// behind a trait so a bounded (TTL/LRU) strategy can replace the unbounded
/// in-memory map without touching the services.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores a document and its content under the document's handle.
    async fn put(&self, document: Document, data: Bytes)
        -> Result<DocumentId, DocumentStoreError>;

    /// Looks up a previously stored document. `Ok(None)` means the handle was
    /// never issued, or the process restarted since it was.
    async fn get(&self, id: DocumentId) -> Result<Option<StoredDocument>, DocumentStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
