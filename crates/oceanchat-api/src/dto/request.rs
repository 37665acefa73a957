use serde::Deserialize;

/// One chat turn request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Raw user input for this turn
    pub text: String,

    /// Speak the reply through the server's speech sink, if one is
    /// configured. Playback failure never fails the turn.
    #[serde(default)]
    pub speak: bool,
}
