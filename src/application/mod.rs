//! Application layer - orchestration between the prompt, the completion
//! port, and the fallback policy. Services depend on domain ports (traits)
//! rather than concrete implementations.

pub mod services;

pub use services::{ChatService, FALLBACK_MESSAGE};
