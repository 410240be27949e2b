mod chat;

pub use chat::{ChatService, FALLBACK_MESSAGE};
