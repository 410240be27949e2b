use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oracle_agent::application::ChatService;
use oracle_agent::domain::{MessageRole, Transcript};
use oracle_agent::infrastructure::{AppConfig, GeminiClient, KnowledgeStore};

/// Interactive terminal session. Turns are strictly sequential: a new input
/// is only read after the previous answer has been rendered. The transcript
/// is display-only and dies with the process.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat=info,oracle_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let knowledge = KnowledgeStore::from_file(&config.knowledge_path);
    let llm = Arc::new(GeminiClient::new(&config.llm)?);
    let service = ChatService::with_defaults(llm, knowledge.text());

    let mut transcript = Transcript::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Wink & Wear — The Oracle");
    println!("Ask me something about the platform (Ctrl-D to quit).");

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        transcript.push(MessageRole::User, input);

        let answer = service.answer_or_fallback(input).await;
        transcript.push(MessageRole::Assistant, answer.as_str());
        println!("oracle> {answer}\n");
    }

    info!(session_id = %transcript.session_id, turns = transcript.len(), "session ended");
    Ok(())
}
