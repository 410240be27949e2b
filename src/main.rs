use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oracle_agent::api::{create_router, AppState};
use oracle_agent::application::ChatService;
use oracle_agent::infrastructure::{AppConfig, GeminiClient, KnowledgeStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,oracle_agent=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let knowledge = KnowledgeStore::from_file(&config.knowledge_path);
    let llm = Arc::new(GeminiClient::new(&config.llm)?);
    let chat_service = Arc::new(ChatService::with_defaults(llm, knowledge.text()));

    let host = config.server.host.clone();
    let port = config.server.port;
    let state = AppState::new(chat_service, config);
    let app = create_router(state);

    let addr = SocketAddr::new(host.parse()?, port);
    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
