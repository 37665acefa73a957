use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{TranscriptResponse, TurnDto};
use crate::state::AppState;

pub async fn handle_transcript(State(state): State<Arc<AppState>>) -> Json<TranscriptResponse> {
    let session = state.session.read().await;

    tracing::info!(turns = session.len(), "Returning session transcript");

    let turns = session.turns().iter().map(TurnDto::from_turn).collect();

    Json(TranscriptResponse {
        session_id: session.id,
        started_at: session.started_at,
        turns,
    })
}
