use std::sync::Arc;

use oceanchat_core::models::ChatSession;
use oceanchat_core::ports::SpeechSink;
use oceanchat_core::ChatEngine;
use tokio::sync::{Mutex, RwLock};

/// Shared server state: one process-wide session, mutated only by
/// appending turns. The engine sits behind a mutex because its random
/// source advances on every profile turn.
pub struct AppState {
    pub engine: Mutex<ChatEngine>,
    pub session: RwLock<ChatSession>,
    pub speech_sink: Option<Arc<dyn SpeechSink + Send + Sync>>,
}

impl AppState {
    pub fn new(engine: ChatEngine, speech_sink: Option<Arc<dyn SpeechSink + Send + Sync>>) -> Self {
        Self {
            engine: Mutex::new(engine),
            session: RwLock::new(ChatSession::new()),
            speech_sink,
        }
    }
}
