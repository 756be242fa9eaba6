use std::sync::Arc;

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::json;

use api::{app, AppState};
use extractor::{CompletionService, LlmConfig};

const MODEL_REPLY: &str = "\
Influenza is a contagious respiratory illness caused by influenza viruses.

Symptoms:
- High fever
- Muscle aches
- Fatigue

Remedies:
- Rest at home
- Drink plenty of fluids
- Take paracetamol for aches

Precautions:
- Avoid close contact with others
- Consult a doctor if it gets worse";

/// Serve a router on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Stub of the chat-completion endpoint returning a fixed body.
fn stub_upstream(reply: serde_json::Value) -> Router {
    Router::new().route(
        "/chat/completions",
        post(move || {
            let reply = reply.clone();
            async move { Json(reply) }
        }),
    )
}

async fn app_against(upstream_url: String) -> String {
    let state = Arc::new(AppState {
        completions: CompletionService::new(&LlmConfig {
            base_url: upstream_url,
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
        }),
    });
    serve(app(state)).await
}

#[tokio::test]
async fn chat_extracts_capped_sections_from_model_reply() {
    let upstream = serve(stub_upstream(json!({
        "choices": [{ "message": { "role": "assistant", "content": MODEL_REPLY } }]
    })))
    .await;
    let base_url = app_against(upstream).await;

    let response = reqwest::Client::new()
        .post(format!("{}/chat", base_url))
        .json(&json!({ "userInput": "flu" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();

    assert!(!body["summary"].as_str().unwrap().is_empty());
    for section in ["symptoms", "remedies", "precautions"] {
        let items = body[section].as_array().unwrap();
        assert!(!items.is_empty(), "{} should not be empty", section);
        assert!(items.len() <= 2, "{} should hold at most 2 items", section);
    }
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn chat_reports_missing_choices_as_soft_error() {
    let upstream = serve(stub_upstream(json!({ "choices": [] }))).await;
    let base_url = app_against(upstream).await;

    let response = reqwest::Client::new()
        .post(format!("{}/chat", base_url))
        .json(&json!({ "userInput": "flu" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid AI response");
    assert_eq!(body["summary"], "The AI service returned an invalid response.");
}

#[tokio::test]
async fn chat_maps_upstream_failure_to_500() {
    let failing = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let upstream = serve(failing).await;
    let base_url = app_against(upstream).await;

    let response = reqwest::Client::new()
        .post(format!("{}/chat", base_url))
        .json(&json!({ "userInput": "flu" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Something went wrong!");
    assert_eq!(
        body["summary"],
        "The server encountered an error while processing your request."
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let upstream = serve(stub_upstream(json!({ "choices": [] }))).await;
    let base_url = app_against(upstream).await;

    let response = reqwest::Client::new()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Server is running");
}
