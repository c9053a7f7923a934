mod gemini_client;
mod retry;

pub use gemini_client::GeminiClient;
pub use retry::{retry_rate_limited, BackoffSchedule, RetryPolicy, Sleep, TokioSleep};
