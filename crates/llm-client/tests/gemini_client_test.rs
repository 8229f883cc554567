//! Integration tests for GeminiClient against a local mockito server.

use llm_client::{GeminiClient, LlmClient};
use mockito::Matcher;
use std::time::Duration;

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash-002:generateContent";

fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
    GeminiClient::new("test-api-key-123".to_string(), Duration::from_secs(5))
        .expect("GeminiClient::new must succeed")
        .with_base_url(server.url())
        .with_model("gemini-1.5-flash-002".to_string())
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "test-api-key-123".into()))
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [{"parts": [{"text": "Say hi"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates":[{"content":{"parts":[{"text":"hi there"}],"role":"model"}}]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let text = client.generate("Say hi").await.expect("generate");

    assert_eq!(text, "hi there");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_concatenates_parts() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates":[{"content":{"parts":[{"text":"first "},{"text":"second"}]}}]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let text = client.generate("prompt").await.expect("generate");

    assert_eq!(text, "first second");
}

#[tokio::test]
async fn test_generate_surfaces_api_error_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate("prompt").await.expect_err("must fail");

    assert!(err.to_string().contains("Quota exceeded"));
}

#[tokio::test]
async fn test_generate_fails_on_missing_candidates() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate("prompt").await.expect_err("must fail");

    assert!(err.to_string().contains("No candidates"));
}

#[tokio::test]
async fn test_generate_fails_on_empty_text() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate("prompt").await.expect_err("must fail");

    assert!(err.to_string().contains("Empty text"));
}
