use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::{Document, DocumentId, StoredDocument};

/// Process-lifetime document store. Entries are never mutated after insert,
/// so concurrent readers only contend on the map lock itself. Unbounded; the
/// store lives and dies with the process.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<DocumentId, StoredDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn put(
        &self,
        document: Document,
        data: Bytes,
    ) -> Result<DocumentId, DocumentStoreError> {
        let id = document.id;
        let stored = StoredDocument {
            meta: document,
            data,
        };

        self.documents.write().await.insert(id, stored);

        tracing::debug!(document_id = %id.as_uuid(), "document stored");
        Ok(id)
    }

    async fn get(&self, id: DocumentId) -> Result<Option<StoredDocument>, DocumentStoreError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }
}
