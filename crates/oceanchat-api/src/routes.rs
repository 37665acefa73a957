use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/chat", post(handlers::chat::handle_chat))
        .route("/api/v1/session", get(handlers::session::handle_transcript))
        .with_state(state)
}
