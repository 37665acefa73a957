use std::sync::Arc;

use axum::{extract::State, Json};
use oceanchat_core::models::Query;

use crate::dto::{ChatRequest, ChatResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Upper bound on accepted query text; the classifier is total, the
/// transport is not a dumping ground.
const MAX_TEXT_BYTES: usize = 4096;

pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    tracing::info!(
        query = %request.text,
        speak = request.speak,
        "Processing chat request"
    );

    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("Query text must not be empty"));
    }

    if request.text.len() > MAX_TEXT_BYTES {
        return Err(ApiError::bad_request("Query text too long")
            .with_details(format!("limit is {} bytes", MAX_TEXT_BYTES)));
    }

    let mut engine = state.engine.lock().await;
    let mut session = state.session.write().await;

    let turn = engine.respond(&mut session, Query::new(request.text)).clone();

    drop(session);
    drop(engine);

    // Spoken output is best-effort: failures become a warning field on the
    // response, never an error status (the turn already happened).
    let warning = if request.speak {
        match &state.speech_sink {
            Some(sink) => match sink.speak(&turn.reply) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!(error = %e, "Speech playback failed");
                    Some(e.to_string())
                }
            },
            None => Some("Speech output is not configured on this server".to_string()),
        }
    } else {
        None
    };

    Ok(Json(ChatResponse::from_turn(&turn, warning)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use oceanchat_core::models::Intent;
    use oceanchat_core::ChatEngine;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(ChatEngine::seeded(5, 12), None))
    }

    fn request(text: &str, speak: bool) -> Json<ChatRequest> {
        Json(ChatRequest { text: text.to_string(), speak })
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let state = state();
        let err = handle_chat(State(state.clone()), request("   ", false))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        // A rejected request must not grow the transcript
        assert!(state.session.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_text_is_rejected() {
        let oversized = "x".repeat(MAX_TEXT_BYTES + 1);
        let err = handle_chat(State(state()), request(&oversized, false))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_valid_text_appends_one_turn() {
        let state = state();
        let response = handle_chat(State(state.clone()), request("salinity?", false))
            .await
            .unwrap();

        assert_eq!(response.0.intent, Intent::Salinity);
        assert!(response.0.warning.is_none());
        assert_eq!(state.session.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_speak_without_sink_warns_but_succeeds() {
        let state = state();
        let response = handle_chat(State(state.clone()), request("hello", true))
            .await
            .unwrap();

        assert_eq!(response.0.intent, Intent::Unknown);
        assert!(response.0.warning.is_some());
        // The warning never loses the turn
        assert_eq!(state.session.read().await.len(), 1);
    }
}
