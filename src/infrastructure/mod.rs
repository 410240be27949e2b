pub mod config;
pub mod knowledge;
pub mod llm;

pub use config::{AppConfig, LlmConfig, ServerConfig};
pub use knowledge::KnowledgeStore;
pub use llm::GeminiClient;
