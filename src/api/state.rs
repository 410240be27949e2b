use std::sync::Arc;

use crate::application::ChatService;
use crate::infrastructure::AppConfig;

/// Shared read-only state for the HTTP surface. Requests are independent, so
/// no synchronization beyond `Arc` is needed.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(chat_service: Arc<ChatService>, config: AppConfig) -> Self {
        Self {
            chat_service,
            config: Arc::new(config),
        }
    }
}
