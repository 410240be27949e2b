mod prompt;
mod transcript;

pub use prompt::{Prompt, DEFAULT_INSTRUCTION};
pub use transcript::{Message, MessageRole, Transcript};
