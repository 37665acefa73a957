use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::floats::FloatRegistry;
use super::intent::Intent;
use super::series::MockSeries;

/// Unique identifier for a chat session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw user input for one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query(String);

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Visual payload attached to a reply, rendered by chart/map collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    /// Mock time series for profile intents (salinity, temperature)
    Series(MockSeries),

    /// Snapshot of the mock float registry
    Floats(FloatRegistry),
}

/// One round of user input and system response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// What the user asked
    pub query: Query,

    /// Classified intent for the query
    pub intent: Intent,

    /// Generated reply text
    pub reply: String,

    /// Optional visual payload (chart data or float records)
    pub payload: Option<Payload>,

    /// When the turn was processed
    pub at: DateTime<Utc>,
}

/// An in-memory conversation transcript.
///
/// Turns are append-only and ordered; the session is owned by the calling
/// interaction loop and never outlives the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    /// Session identifier
    pub id: SessionId,

    /// When the session started
    pub started_at: DateTime<Utc>,

    turns: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            started_at: Utc::now(),
            turns: Vec::new(),
        }
    }

    /// Append a turn, returning a reference to it
    pub fn push(&mut self, turn: ChatTurn) -> &ChatTurn {
        self.turns.push(turn);
        self.turns.last().expect("just pushed")
    }

    /// Ordered transcript, oldest first
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(text: &str) -> ChatTurn {
        ChatTurn {
            query: Query::new(text),
            intent: Intent::Unknown,
            reply: "reply".to_string(),
            payload: None,
            at: Utc::now(),
        }
    }

    #[test]
    fn test_push_preserves_order() {
        let mut session = ChatSession::new();
        session.push(turn("first"));
        session.push(turn("second"));
        session.push(turn("third"));

        let texts: Vec<&str> = session.turns().iter().map(|t| t.query.text()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_history_grows_by_one() {
        let mut session = ChatSession::new();
        assert!(session.is_empty());

        session.push(turn("hello"));
        assert_eq!(session.len(), 1);

        session.push(turn("again"));
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_fresh_sessions_have_distinct_ids() {
        assert_ne!(ChatSession::new().id, ChatSession::new().id);
    }
}
