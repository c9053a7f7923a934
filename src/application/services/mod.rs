mod analysis_service;
mod chat_service;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use chat_service::{ChatError, ChatService};

/// User-facing text returned when the provider stayed rate-limited through
/// every retry attempt.
pub(crate) const OVERLOADED_MESSAGE: &str = "The AI service is currently overloaded or unavailable after multiple retries. Please try again later.";
