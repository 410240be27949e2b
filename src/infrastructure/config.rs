use std::time::Duration;

use crate::domain::{AgentError, Result};

const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_KNOWLEDGE_PATH: &str = "knowledge.txt";
const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Process configuration, built once at startup and passed by reference into
/// each component. Nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub knowledge_path: String,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_attempts: u32,
    pub timeout: Duration,
    /// Pause between transient-failure attempts. Zero means retry
    /// immediately.
    pub retry_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the environment. A missing `GOOGLE_API_KEY`
    /// is a fatal configuration error; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| {
            AgentError::configuration("GOOGLE_API_KEY is not set; check your environment or .env file")
        })?;

        Ok(Self {
            llm: LlmConfig {
                api_key,
                model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
                base_url: env_or("GEMINI_BASE_URL", DEFAULT_BASE_URL),
                max_attempts: env_parsed("LLM_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS),
                timeout: Duration::from_secs(env_parsed("LLM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
                retry_delay: Duration::from_millis(env_parsed("LLM_RETRY_DELAY_MS", 0)),
            },
            knowledge_path: env_or("KNOWLEDGE_PATH", DEFAULT_KNOWLEDGE_PATH),
            server: ServerConfig {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 8080),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
