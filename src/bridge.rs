use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Outbound adapter to a text-generation model.
#[async_trait]
pub trait CompletionBridge: Send + Sync {
    async fn complete(&self, instruction: &str) -> Result<String, BridgeError>;
}

#[derive(Clone)]
pub struct BridgeConfig {
    api_key: String,
    base_url: String,
    model: String,
    timeout_ms: Option<u64>,
}

impl BridgeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.has_api_key() { "<redacted>" } else { "<unset>" };
        f.debug_struct("BridgeConfig")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[derive(Debug)]
pub enum BridgeError {
    MissingApiKey,
    Timeout,
    Transport(reqwest::Error),
    Api { status: u16, message: String },
    Blocked(String),
    EmptyCompletion,
    MalformedResponse(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "Gemini API key is missing: set GEMINI_AI_API"),
            Self::Timeout => write!(f, "Gemini request timed out"),
            Self::Transport(err) => write!(f, "failed to reach Gemini: {err}"),
            Self::Api { message, .. } => f.write_str(message),
            Self::Blocked(reason) => write!(f, "prompt was blocked by the model: {reason}"),
            Self::EmptyCompletion => write!(f, "model returned an empty completion"),
            Self::MalformedResponse(detail) => {
                write!(f, "failed to parse Gemini response: {detail}")
            }
        }
    }
}

impl Error for BridgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Talks to the Gemini `generateContent` endpoint.
pub struct GeminiBridge {
    config: BridgeConfig,
    client: reqwest::Client,
}

impl GeminiBridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn send(&self, instruction: &str) -> Result<String, BridgeError> {
        let payload = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [TextPart { text: instruction }],
            }],
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(BridgeError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(BridgeError::Transport)?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|err| BridgeError::MalformedResponse(err.to_string()))?;
        extract_completion(parsed)
    }
}

#[async_trait]
impl CompletionBridge for GeminiBridge {
    async fn complete(&self, instruction: &str) -> Result<String, BridgeError> {
        if !self.config.has_api_key() {
            return Err(BridgeError::MissingApiKey);
        }

        debug!(
            model = %self.config.model,
            instruction_len = instruction.len(),
            "sending generateContent request"
        );

        match self.config.timeout_ms {
            Some(ms) => timeout(Duration::from_millis(ms), self.send(instruction))
                .await
                .map_err(|_| BridgeError::Timeout)?,
            None => self.send(instruction).await,
        }
    }
}

fn api_error(status: u16, body: &str) -> BridgeError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            format!("Gemini request failed with status {status}: {}", body.trim())
        });
    warn!(status, %message, "Gemini returned an error");
    BridgeError::Api { status, message }
}

fn extract_completion(response: GenerateContentResponse) -> Result<String, BridgeError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason);
        return Err(match reason {
            Some(reason) => BridgeError::Blocked(reason),
            None => BridgeError::EmptyCompletion,
        });
    };

    // A candidate without text parts yields an empty completion.
    Ok(candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect())
}
