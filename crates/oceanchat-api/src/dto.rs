pub mod request;
pub mod response;

pub use request::ChatRequest;
pub use response::{ChatResponse, FloatsDto, SeriesPointDto, TranscriptResponse, TurnDto};
