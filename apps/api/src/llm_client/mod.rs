/// LLM Client — the single point of entry for all Gradient AI calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// Handlers depend on the [`CompletionModel`] trait, never on the concrete
/// client, so tests can inject a stub backend.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GRADIENT_API_URL: &str = "https://api.gradient.ai/v1/chat/completions";
/// The model used for all completion calls.
pub const MODEL: &str = "openai-gpt-oss-120b";
/// Environment variable holding the Gradient AI bearer credential.
pub const API_KEY_ENV: &str = "MODEL_ACCESS_KEY";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("MODEL_ACCESS_KEY environment variable is not set")]
    MissingApiKey,

    #[error("rate limited by Gradient AI")]
    RateLimited,

    #[error("Gradient AI rejected the API key")]
    Auth,

    #[error("Gradient AI error: {0}")]
    Api(u16),

    #[error("No content generated")]
    EmptyContent,
}

/// Chat-style completion backend.
///
/// One outbound call per invocation — no retries, no caching. Every failure
/// surfaces as an [`LlmError`] for the handler boundary to translate.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Sends the persona system message followed by `prompt` and returns the
    /// generated text.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// Upstream response fields are all defaulted: a structurally odd success body
// must surface as EmptyContent, not a deserialization error.
#[derive(Debug, Default, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
struct Choice {
    #[serde(default)]
    message: ResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// The Gradient AI chat-completions client used by all endpoints.
#[derive(Clone)]
pub struct GradientClient {
    client: Client,
    persona: &'static str,
}

impl GradientClient {
    pub fn new(persona: &'static str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            persona,
        }
    }
}

#[async_trait]
impl CompletionModel for GradientClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        // Credential is read per call, never cached at startup.
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| LlmError::MissingApiKey)?;

        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: self.persona,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens,
        };

        let response = self
            .client
            .post(GRADIENT_API_URL)
            .bearer_auth(&api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if status.as_u16() == 429 {
            warn!("Gradient AI rate limited the request");
            return Err(LlmError::RateLimited);
        }
        if matches!(status.as_u16(), 401 | 402) {
            warn!("Gradient AI rejected the credential (status {status})");
            return Err(LlmError::Auth);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gradient AI returned {status}: {body}");
            return Err(LlmError::Api(status.as_u16()));
        }

        let completion: ChatResponse = response.json().await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyContent)?;

        debug!("Gradient AI completion succeeded ({} chars)", content.len());

        Ok(content)
    }
}
