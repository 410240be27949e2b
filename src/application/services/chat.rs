use std::sync::Arc;

use tracing::{error, instrument};

use crate::domain::{ports::CompletionService, AgentError, Prompt, DEFAULT_INSTRUCTION};

/// Fixed apology text substituted when no genuine answer can be obtained.
pub const FALLBACK_MESSAGE: &str =
    "I'm sorry, I'm having trouble connecting right now. Please try again later.";

/// Single-turn answering service shared by both deployment surfaces. Holds
/// the instruction and knowledge text immutably for the process lifetime and
/// rebuilds the full prompt on every call.
pub struct ChatService {
    completion: Arc<dyn CompletionService>,
    instruction: String,
    knowledge: String,
}

impl ChatService {
    pub fn new(
        completion: Arc<dyn CompletionService>,
        instruction: impl Into<String>,
        knowledge: impl Into<String>,
    ) -> Self {
        Self {
            completion,
            instruction: instruction.into(),
            knowledge: knowledge.into(),
        }
    }

    pub fn with_defaults(completion: Arc<dyn CompletionService>, knowledge: impl Into<String>) -> Self {
        Self::new(completion, DEFAULT_INSTRUCTION, knowledge)
    }

    /// Tagged result: callers that care whether the text is a genuine answer
    /// get the distinction here.
    #[instrument(skip(self, message))]
    pub async fn answer(&self, message: &str) -> Result<String, AgentError> {
        let prompt = Prompt::build(&self.instruction, &self.knowledge, message);
        self.completion.complete(&prompt).await
    }

    /// Boundary helper: absorbs any failure into [`FALLBACK_MESSAGE`] so the
    /// user always receives something displayable.
    pub async fn answer_or_fallback(&self, message: &str) -> String {
        match self.answer(message).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "completion failed, serving fallback");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
