use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use oracle_agent::domain::{ports::CompletionService, AgentError, Prompt};
use oracle_agent::infrastructure::{GeminiClient, LlmConfig};

const GENERATE_PATH: &str = "/models/gemini-test:generateContent";

fn test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        api_key: "test-key".to_string(),
        model: "gemini-test".to_string(),
        base_url: base_url.to_string(),
        max_attempts: 3,
        timeout: Duration::from_secs(2),
        retry_delay: Duration::ZERO,
    }
}

fn candidate_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}}
        ]
    })
}

fn test_prompt() -> Prompt {
    Prompt::build("Be brief.", "Widgets are blue.", "What color?")
}

#[tokio::test]
async fn succeeds_first_try_and_stops() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("Blue.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&test_llm_config(&server.uri())).unwrap();
    let answer = client.complete(&test_prompt()).await.unwrap();
    assert_eq!(answer, "Blue.");
}

#[tokio::test]
async fn retries_transient_failures_then_succeeds() {
    let server = MockServer::start().await;

    // First two attempts hit a 500, the third gets a real answer.
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("Recovered.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&test_llm_config(&server.uri())).unwrap();
    let answer = client.complete(&test_prompt()).await.unwrap();
    assert_eq!(answer, "Recovered.");
}

#[tokio::test]
async fn exhausts_attempt_budget_on_persistent_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&test_llm_config(&server.uri())).unwrap();
    let err = client.complete(&test_prompt()).await.unwrap_err();
    assert!(err.is_transient());
}

#[tokio::test]
async fn malformed_success_body_aborts_without_retry() {
    let server = MockServer::start().await;

    // 2xx with no candidates is not a transport problem; retrying would not
    // help, so the loop must stop after one attempt.
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&test_llm_config(&server.uri())).unwrap();
    let err = client.complete(&test_prompt()).await.unwrap_err();
    assert!(matches!(err, AgentError::FatalClient(_)));
}

#[tokio::test]
async fn client_errors_are_retried_like_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("Fine now.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&test_llm_config(&server.uri())).unwrap();
    let answer = client.complete(&test_prompt()).await.unwrap();
    assert_eq!(answer, "Fine now.");
}

#[tokio::test]
async fn connection_failure_counts_as_transient() {
    // Nothing is listening on this port.
    let mut config = test_llm_config("http://127.0.0.1:9");
    config.max_attempts = 2;

    let client = GeminiClient::new(&config).unwrap();
    let err = client.complete(&test_prompt()).await.unwrap_err();
    assert!(err.is_transient());
}
