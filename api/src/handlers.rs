use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use extractor::{extract_structured_answer, StructuredAnswer};

use crate::chat_payload::ChatPayload;
use crate::AppState;

pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatPayload>,
) -> impl IntoResponse {
    log::info!("received chat request for: {}", payload.user_input);

    match state.completions.answer(&payload.user_input).await {
        Ok(Some(content)) => {
            let answer = extract_structured_answer(&content);
            log::info!("structured answer: {:?}", answer);
            (StatusCode::OK, Json(answer))
        }
        Ok(None) => {
            log::error!("completion reply had no message content");
            (StatusCode::OK, Json(StructuredAnswer::upstream_invalid()))
        }
        Err(e) => {
            log::error!("completion request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StructuredAnswer::server_error()),
            )
        }
    }
}

pub async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Server is running"
    }))
}
