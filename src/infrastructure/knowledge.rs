use std::path::Path;

use tracing::{info, warn};

/// Substituted when the knowledge file cannot be read. Startup continues so
/// the chat surfaces stay available, just uninformed.
pub const MISSING_FILE_PLACEHOLDER: &str =
    "This is a default knowledge base because the file was not found.";

/// Static domain-description text injected into every prompt. Loaded once at
/// process start and immutable afterwards.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    text: String,
}

impl KnowledgeStore {
    /// Reads the knowledge file. A missing or unreadable file logs a warning
    /// and substitutes the placeholder instead of failing startup.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                info!(path = %path.display(), bytes = text.len(), "knowledge base loaded");
                Self { text }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "knowledge file unavailable, using placeholder");
                Self {
                    text: MISSING_FILE_PLACEHOLDER.to_string(),
                }
            }
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_substitutes_placeholder() {
        let store = KnowledgeStore::from_file("/definitely/not/here/knowledge.txt");
        assert_eq!(store.text(), MISSING_FILE_PLACEHOLDER);
    }

    #[test]
    fn inline_text_is_kept_verbatim() {
        let store = KnowledgeStore::from_text("Widgets are blue.");
        assert_eq!(store.text(), "Widgets are blue.");
    }
}
