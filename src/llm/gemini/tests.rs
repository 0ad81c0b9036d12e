use super::*;
use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio_test::assert_ok;
use url::Url;

#[derive(Clone, Default)]
struct Captured {
    body: Arc<Mutex<Option<Value>>>,
    api_key: Arc<Mutex<Option<String>>>,
}

/// Serves `reply` for every generateContent call on a random local port.
async fn mock_provider(status: StatusCode, reply: Value, delay: Duration) -> (Url, Captured) {
    let captured = Captured::default();
    let handler = move |State(captured): State<Captured>,
                        headers: HeaderMap,
                        Json(body): Json<Value>| {
        let reply = reply.clone();
        async move {
            *captured.body.lock().unwrap() = Some(body);
            *captured.api_key.lock().unwrap() = headers
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            tokio::time::sleep(delay).await;
            (status, Json(reply))
        }
    };
    let app = Router::new()
        .route("/v1beta/models/:call", post(handler))
        .with_state(captured.clone());

    (serve(app).await, captured)
}

/// Answers 200 with a body that is not JSON.
async fn garbled_provider(body: &'static str) -> Url {
    let app = Router::new().route(
        "/v1beta/models/:call",
        post(move || async move { (StatusCode::OK, body) }),
    );
    serve(app).await
}

async fn serve(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{}/v1beta", addr)).unwrap()
}

fn config_for(api_url: Url) -> Config {
    Config {
        api_key: Some("test-key".to_string()),
        api_url,
        ..Config::default()
    }
}

fn text_reply(parts: &[&str]) -> Value {
    let parts: Vec<Value> = parts.iter().map(|t| json!({ "text": t })).collect();
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP"
        }]
    })
}

#[test]
fn test_endpoint_url() {
    assert_eq!(
        endpoint_url("https://example.com/v1beta/", "gemini-1.5-flash-latest"),
        "https://example.com/v1beta/models/gemini-1.5-flash-latest:generateContent"
    );
}

#[test]
fn test_missing_credential() {
    let result = GeminiClient::from_config(&Config::default());
    assert!(matches!(result, Err(LLMError::MissingCredential)));
}

#[test]
fn test_request_body_shape() {
    let mut config = config_for(Url::parse("http://localhost/v1beta").unwrap());
    let client = assert_ok!(GeminiClient::from_config(&config));
    let body = serde_json::to_value(client.request_body("hello")).unwrap();
    assert_eq!(
        body,
        json!({ "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }] })
    );

    config.generation.max_output_tokens = Some(256);
    let client = assert_ok!(GeminiClient::from_config(&config));
    let body = serde_json::to_value(client.request_body("hello")).unwrap();
    assert_eq!(body["generationConfig"], json!({ "maxOutputTokens": 256 }));
}

#[test]
fn test_extract_text_joins_parts() {
    let response: GenerateContentResponse =
        serde_json::from_value(text_reply(&["## Tagline\n", "Beans on wheels."])).unwrap();
    assert_eq!(extract_text(response).unwrap(), "## Tagline\nBeans on wheels.");
}

#[test]
fn test_extract_text_reports_block_reason() {
    let response: GenerateContentResponse =
        serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } })).unwrap();
    match extract_text(response) {
        Err(LLMError::EmptyResponse { reason }) => assert!(reason.contains("SAFETY")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_extract_text_rejects_blank_candidate() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{ "content": { "parts": [{ "text": "  " }] }, "finishReason": "MAX_TOKENS" }]
    }))
    .unwrap();
    assert!(matches!(
        extract_text(response),
        Err(LLMError::EmptyResponse { .. })
    ));
}

#[tokio::test]
async fn test_generate_round_trip() {
    let (url, captured) =
        mock_provider(StatusCode::OK, text_reply(&["Pitch text"]), Duration::ZERO).await;
    let client = assert_ok!(GeminiClient::from_config(&config_for(url)));

    let text = client.generate("the prompt").await.unwrap();
    assert_eq!(text, "Pitch text");

    let body = captured.body.lock().unwrap().clone().unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "the prompt");
    assert_eq!(captured.api_key.lock().unwrap().as_deref(), Some("test-key"));
}

#[tokio::test]
async fn test_generate_maps_status_codes() {
    let (url, _) = mock_provider(
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": "API key not valid" } }),
        Duration::ZERO,
    )
    .await;
    let client = assert_ok!(GeminiClient::from_config(&config_for(url)));
    assert!(matches!(
        client.generate("p").await,
        Err(LLMError::Authentication { status: 401 })
    ));

    let (url, _) = mock_provider(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "quota" } }),
        Duration::ZERO,
    )
    .await;
    let client = assert_ok!(GeminiClient::from_config(&config_for(url)));
    assert!(matches!(client.generate("p").await, Err(LLMError::RateLimited)));

    let (url, _) = mock_provider(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": { "message": "backend exploded" } }),
        Duration::ZERO,
    )
    .await;
    let client = assert_ok!(GeminiClient::from_config(&config_for(url)));
    match client.generate("p").await {
        Err(LLMError::Http { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("backend exploded"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_rejects_malformed_body() {
    let url = garbled_provider("<html>not json</html>").await;
    let client = assert_ok!(GeminiClient::from_config(&config_for(url)));
    assert!(matches!(
        client.generate("p").await,
        Err(LLMError::InvalidResponse { .. })
    ));
}

#[tokio::test]
async fn test_generate_times_out() {
    let (url, _) =
        mock_provider(StatusCode::OK, text_reply(&["late"]), Duration::from_secs(5)).await;
    let config = Config {
        request_timeout: Duration::from_millis(100),
        ..config_for(url)
    };
    let client = assert_ok!(GeminiClient::from_config(&config));
    assert!(matches!(client.generate("p").await, Err(LLMError::Timeout)));
}

#[tokio::test]
async fn test_generate_connection_refused() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{}/v1beta", addr)).unwrap();
    let client = assert_ok!(GeminiClient::from_config(&config_for(url)));
    assert!(matches!(
        client.generate("p").await,
        Err(LLMError::Connection { .. })
    ));
}
