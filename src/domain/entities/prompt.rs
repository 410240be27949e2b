/// Instruction given to the model on every call. The knowledge base is
/// interpolated below it; nothing else about the conversation is sent.
pub const DEFAULT_INSTRUCTION: &str = r#"You are "Oracle," a helpful, friendly, and knowledgeable AI concierge for the "Wink & Wear" platform. Your role is to interact with users, assist them with navigation, explain features, and answer any questions about the project's vision and roadmap.
Your responses should be concise, encouraging, and based *only* on the information provided in the knowledge base below. If a user asks about a topic irrelevant to the knowledge base, politely state that you can only provide information about the "Wink & Wear" platform and its features."#;

/// A fully assembled outbound prompt: the system half (instruction plus the
/// delimited knowledge block) and the user's question. Building one is pure
/// string concatenation and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub question: String,
}

impl Prompt {
    /// Assemble a prompt. The user message is trimmed of surrounding
    /// whitespace; an empty message passes through unchanged.
    pub fn build(instruction: &str, knowledge: &str, user_message: &str) -> Self {
        let system = format!(
            "{instruction}\n\n--- KNOWLEDGE BASE ---\n{knowledge}\n----------------------\n"
        );
        let question = format!("User's question: {}", user_message.trim());
        Self { system, question }
    }

    /// The prompt as a single string, system half first.
    pub fn as_text(&self) -> String {
        format!("{}\n{}", self.system, self.question)
    }
}
