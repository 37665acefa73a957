//! Error types for OceanChat

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OceanChatError {
    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Voice collaborator errors. Callers surface these as warnings,
    // never as failed turns.
    #[error("Speech output unavailable: {reason}. Try: {remediation}")]
    VoiceUnavailable { reason: String, remediation: String },

    #[error("Speech input produced no query: {reason}")]
    SpeechNotRecognized { reason: String },
}

pub type Result<T> = std::result::Result<T, OceanChatError>;
