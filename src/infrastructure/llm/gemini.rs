use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{ports::CompletionService, AgentError, Prompt, Result};
use crate::infrastructure::config::LlmConfig;

/// Wire body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the hosted Gemini completion API.
///
/// One synchronous call per attempt, up to `max_attempts`, with a fixed
/// per-attempt timeout. Transient failures (HTTP error status, connection
/// failure, timeout) are logged and retried; anything else aborts the loop.
pub struct GeminiClient {
    http: HttpClient,
    base_url: String,
    model: String,
    api_key: String,
    max_attempts: u32,
    retry_delay: Duration,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AgentError::configuration(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            max_attempts: config.max_attempts,
            retry_delay: config.retry_delay,
        })
    }

    /// The API has no distinct system role, so the instruction rides in a
    /// user-role part ahead of the question.
    fn payload(prompt: &Prompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![
                Content {
                    role: "user".to_string(),
                    parts: vec![Part {
                        text: prompt.system.clone(),
                    }],
                },
                Content {
                    role: "user".to_string(),
                    parts: vec![Part {
                        text: prompt.question.clone(),
                    }],
                },
            ],
        }
    }

    async fn attempt(&self, payload: &GenerateContentRequest) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(payload)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::transient(format!("upstream returned {status}")));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AgentError::fatal(format!("failed to decode upstream body: {e}")))?;

        extract_text(body)
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        let payload = Self::payload(prompt);

        for attempt in 1..=self.max_attempts {
            match self.attempt(&payload).await {
                Ok(text) => {
                    debug!(attempt, "completion succeeded");
                    return Ok(text);
                }
                Err(err) if err.is_transient() => {
                    warn!(attempt, max_attempts = self.max_attempts, error = %err, "upstream attempt failed");
                    if attempt < self.max_attempts && !self.retry_delay.is_zero() {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
                Err(err) => {
                    warn!(attempt, error = %err, "aborting retries after non-retryable failure");
                    return Err(err);
                }
            }
        }

        Err(AgentError::transient(format!(
            "gave up after {} attempts",
            self.max_attempts
        )))
    }
}

fn classify_send_error(e: reqwest::Error) -> AgentError {
    if e.is_timeout() {
        AgentError::transient(format!("request timed out: {e}"))
    } else if e.is_connect() {
        AgentError::transient(format!("connection failed: {e}"))
    } else if e.status().is_some() {
        AgentError::transient(format!("upstream status error: {e}"))
    } else {
        AgentError::fatal(e.to_string())
    }
}

fn extract_text(body: GenerateContentResponse) -> Result<String> {
    body.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| AgentError::fatal("upstream response contained no candidate text"))
}
