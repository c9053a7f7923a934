use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bytes::Bytes;

use lexiscan::application::ports::{DocumentStore, LlmClient, LlmClientError};
use lexiscan::application::services::{ChatError, ChatService};
use lexiscan::domain::{ChatTurn, ContentType, Document, DocumentId, StoredDocument, TurnRole};
use lexiscan::infrastructure::persistence::InMemoryDocumentStore;

const DOCUMENT_BYTES: &[u8] = b"Rent is $1000/month, due on the 1st.";

#[derive(Clone)]
struct CapturedTurn {
    history: Vec<ChatTurn>,
    document_bytes: Vec<u8>,
    mime_type: String,
    message: String,
}

struct RecordingLlmClient {
    calls: AtomicUsize,
    captured: Mutex<Option<CapturedTurn>>,
    error: Option<fn() -> LlmClientError>,
}

impl RecordingLlmClient {
    fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            captured: Mutex::new(None),
            error: None,
        }
    }

    fn failing(error: fn() -> LlmClientError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            captured: Mutex::new(None),
            error: Some(error),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for RecordingLlmClient {
    async fn generate_once(&self, _prompt: &str) -> Result<String, LlmClientError> {
        unreachable!("chat flow must not use single-turn generation")
    }

    async fn generate_chat_turn(
        &self,
        history: &[ChatTurn],
        document: &StoredDocument,
        message: &str,
    ) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.captured.lock().unwrap() = Some(CapturedTurn {
            history: history.to_vec(),
            document_bytes: document.data.to_vec(),
            mime_type: document.meta.content_type.as_mime().to_string(),
            message: message.to_string(),
        });

        match self.error {
            Some(make_error) => Err(make_error()),
            None => Ok("Mock reply".to_string()),
        }
    }
}

async fn store_with_lease() -> (Arc<dyn DocumentStore>, DocumentId) {
    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
    let document = Document::new(
        "lease.txt".to_string(),
        ContentType::Text,
        DOCUMENT_BYTES.len() as u64,
    );
    let id = store
        .put(document, Bytes::from_static(DOCUMENT_BYTES))
        .await
        .unwrap();
    (store, id)
}

#[tokio::test]
async fn given_unknown_handle_when_chatting_then_not_found_without_provider_call() {
    let llm_client = Arc::new(RecordingLlmClient::succeeding());
    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
    let service = ChatService::new(store, Arc::clone(&llm_client));

    let result = service.chat(DocumentId::new(), "hello", &[]).await;

    assert!(matches!(result, Err(ChatError::DocumentNotFound(_))));
    assert_eq!(llm_client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_stored_document_when_chatting_then_provider_receives_document_and_message() {
    let llm_client = Arc::new(RecordingLlmClient::succeeding());
    let (store, id) = store_with_lease().await;
    let service = ChatService::new(store, Arc::clone(&llm_client));

    let reply = service.chat(id, "When is rent due?", &[]).await.unwrap();

    assert_eq!(reply, "Mock reply");
    assert_eq!(llm_client.calls.load(Ordering::SeqCst), 1);

    let captured = llm_client.captured.lock().unwrap().clone().unwrap();
    assert_eq!(captured.document_bytes, DOCUMENT_BYTES.to_vec());
    assert_eq!(captured.mime_type, "text/plain");
    assert_eq!(captured.message, "When is rent due?");
    assert!(captured.history.is_empty());
}

#[tokio::test]
async fn given_history_when_chatting_then_order_and_roles_are_preserved() {
    let llm_client = Arc::new(RecordingLlmClient::succeeding());
    let (store, id) = store_with_lease().await;
    let service = ChatService::new(store, Arc::clone(&llm_client));

    let history = vec![
        ChatTurn::new(TurnRole::User, "Is there a late fee?"),
        ChatTurn::new(TurnRole::Assistant, "Yes, $50 after the 5th."),
        ChatTurn::new(TurnRole::User, "And the deposit?"),
    ];

    service.chat(id, "Thanks!", &history).await.unwrap();

    let captured = llm_client.captured.lock().unwrap().clone().unwrap();
    assert_eq!(captured.history, history);
}

#[tokio::test]
async fn given_provider_failure_when_chatting_then_reply_carries_detail() {
    let llm_client = Arc::new(RecordingLlmClient::failing(|| {
        LlmClientError::ApiRequestFailed("500: upstream exploded".to_string())
    }));
    let (store, id) = store_with_lease().await;
    let service = ChatService::new(store, Arc::clone(&llm_client));

    let reply = service.chat(id, "hello", &[]).await.unwrap();

    assert!(reply.contains("upstream exploded"));
}

#[tokio::test]
async fn given_overloaded_provider_when_chatting_then_reply_is_overloaded_message() {
    let llm_client = Arc::new(RecordingLlmClient::failing(|| LlmClientError::Overloaded));
    let (store, id) = store_with_lease().await;
    let service = ChatService::new(store, Arc::clone(&llm_client));

    let reply = service.chat(id, "hello", &[]).await.unwrap();

    assert!(reply.contains("overloaded or unavailable"));
}
