use async_trait::async_trait;

use crate::domain::entities::Prompt;
use crate::domain::errors::AgentError;

/// Port for the hosted completion API. Implementations own their transport,
/// retry policy, and wire encoding; callers see either extracted answer text
/// or a classified error.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<String, AgentError>;
}
