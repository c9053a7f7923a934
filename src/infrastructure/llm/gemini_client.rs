use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::application::prompts::CHAT_SYSTEM_INSTRUCTION;
use crate::domain::{ChatTurn, StoredDocument, TurnRole};

use super::retry::{retry_rate_limited, RetryPolicy, Sleep, TokioSleep};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the Gemini `generateContent` REST API.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    retry_policy: RetryPolicy,
    sleep: Arc<dyn Sleep>,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            retry_policy: RetryPolicy::default(),
            sleep: Arc::new(TokioSleep),
        }
    }

    pub fn with_retry(mut self, policy: RetryPolicy, sleep: Arc<dyn Sleep>) -> Self {
        self.retry_policy = policy;
        self.sleep = sleep;
        self
    }

    fn provider_role(role: TurnRole) -> &'static str {
        match role {
            TurnRole::User => "user",
            TurnRole::Assistant => "model",
        }
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String, LlmClientError> {
        let url = format!(
            "{BASE_URL}/{model}:generateContent?key={api_key}",
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(classify_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(format!("failed to parse response: {e}")))?;

        extract_candidate_text(parsed)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate_once(&self, prompt: &str) -> Result<String, LlmClientError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part::text(prompt)],
            }],
            system_instruction: None,
        };

        retry_rate_limited(self.retry_policy, self.sleep.as_ref(), || {
            self.send_request(&request)
        })
        .await
    }

    #[tracing::instrument(
        skip_all,
        fields(model = %self.model, history_len = history.len())
    )]
    async fn generate_chat_turn(
        &self,
        history: &[ChatTurn],
        document: &StoredDocument,
        message: &str,
    ) -> Result<String, LlmClientError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: Self::provider_role(turn.role).to_string(),
                parts: vec![Part::text(&turn.content)],
            })
            .collect();

        contents.push(Content {
            role: "user".to_string(),
            parts: vec![
                Part::inline_data(document.meta.content_type.as_mime(), &document.data),
                Part::text(message),
            ],
        });

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content {
                role: "system".to_string(),
                parts: vec![Part::text(CHAT_SYSTEM_INSTRUCTION)],
            }),
        };

        // Chat turns get a single attempt; only the one-shot path retries.
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    fn inline_data(mime_type: &str, data: &[u8]) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.to_string(),
                data: BASE64_STANDARD.encode(data),
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_candidate_text(response: GenerateContentResponse) -> Result<String, LlmClientError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            LlmClientError::InvalidResponse("no text in response candidates".to_string())
        })
}

fn classify_http_error(status: StatusCode, body: String) -> LlmClientError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or(body);

    // The provider reports overload as 503 UNAVAILABLE about as often as 429,
    // so both classify as rate limiting for the retry loop.
    match status {
        StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE => {
            LlmClientError::RateLimited(message)
        }
        _ => LlmClientError::ApiRequestFailed(format!("{}: {message}", status.as_u16())),
    }
}
