use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use lexiscan::application::ports::{DocumentStore, FileLoader};
use lexiscan::application::services::{AnalysisService, ChatService};
use lexiscan::domain::ContentType;
use lexiscan::infrastructure::llm::GeminiClient;
use lexiscan::infrastructure::observability::{init_tracing, TracingConfig};
use lexiscan::infrastructure::persistence::InMemoryDocumentStore;
use lexiscan::infrastructure::text_processing::{
    CompositeFileLoader, PdfAdapter, PlainTextAdapter,
};
use lexiscan::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Missing API key is the one fatal configuration error.
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig {
        json_format: settings.logging.json_format,
    });

    let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let file_loader = Arc::new(CompositeFileLoader::new(vec![
        (ContentType::Pdf, pdf_adapter),
        (ContentType::Text, text_adapter),
    ]));

    let llm_client = Arc::new(GeminiClient::new(
        settings.gemini.api_key.clone(),
        settings.gemini.model.clone(),
    ));

    let document_store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());

    let analysis_service = Arc::new(AnalysisService::new(
        Arc::clone(&file_loader),
        Arc::clone(&llm_client),
    ));
    let chat_service = Arc::new(ChatService::new(
        Arc::clone(&document_store),
        Arc::clone(&llm_client),
    ));

    let state = AppState {
        analysis_service,
        chat_service,
        document_store,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(model = %settings.gemini.model, "Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
