//! Query responder
//!
//! [`ChatEngine`] turns one query into one transcript turn: classify the
//! text, build the intent's mock payload, and append the canned reply to
//! the caller's session.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{
    classify, ChatSession, ChatTurn, FloatRegistry, Intent, MockSeries, Payload, Query,
};

pub const DEFAULT_SERIES_WINDOW: usize = 30;

/// Reply shown for queries that match no keyword rule
pub const UNKNOWN_REPLY: &str =
    "Sorry, I couldn't understand that. Try asking about salinity, temperature, or floats.";

/// Chat engine: classifier plus mock-payload generator.
///
/// Owns the random source and the float registry; the session transcript is
/// owned by the calling interaction loop and passed in per turn.
pub struct ChatEngine<R: Rng = StdRng> {
    rng: R,
    registry: FloatRegistry,
    series_window: usize,
}

impl ChatEngine<StdRng> {
    /// Engine with an OS-seeded random source and the fixed float registry
    pub fn new(series_window: usize) -> Self {
        Self::with_rng(StdRng::from_entropy(), series_window)
    }

    /// Engine with a deterministic random source
    pub fn seeded(seed: u64, series_window: usize) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), series_window)
    }
}

impl<R: Rng> ChatEngine<R> {
    pub fn with_rng(rng: R, series_window: usize) -> Self {
        Self {
            rng,
            registry: FloatRegistry::default(),
            series_window,
        }
    }

    pub fn registry(&self) -> &FloatRegistry {
        &self.registry
    }

    pub fn series_window(&self) -> usize {
        self.series_window
    }

    /// Process one query: classify, build the payload, append the turn.
    ///
    /// Total over all input strings; unmatched text gets the fixed apology
    /// and no payload. Exactly one turn is appended per call.
    pub fn respond<'s>(&mut self, session: &'s mut ChatSession, query: Query) -> &'s ChatTurn {
        let intent = classify(query.text());

        let (reply, payload) = match intent {
            intent if intent.is_profile() => {
                let series = MockSeries::generate(intent, self.series_window, &mut self.rng)
                    .expect("profile intents always have bounds");
                (
                    format!("Here is the {} profile you asked for 🌊📊", intent.topic()),
                    Some(Payload::Series(series)),
                )
            }
            Intent::Floats => (
                "Here are the ARGO floats near your region 🗺️".to_string(),
                Some(Payload::Floats(self.registry.clone())),
            ),
            _ => (UNKNOWN_REPLY.to_string(), None),
        };

        tracing::debug!(query = query.text(), intent = ?intent, "processed chat turn");

        session.push(ChatTurn {
            query,
            intent,
            reply,
            payload,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ChatEngine {
        ChatEngine::seeded(42, DEFAULT_SERIES_WINDOW)
    }

    #[test]
    fn test_salinity_turn() {
        let mut session = ChatSession::new();
        let turn = engine().respond(&mut session, Query::new("What's the salinity like?"));

        assert_eq!(turn.intent, Intent::Salinity);
        assert!(turn.reply.contains("salinity profile"));
        match &turn.payload {
            Some(Payload::Series(series)) => {
                assert_eq!(series.len(), DEFAULT_SERIES_WINDOW);
                assert_eq!(series.parameter, Intent::Salinity);
            }
            other => panic!("expected series payload, got {:?}", other),
        }
    }

    #[test]
    fn test_temperature_turn() {
        let mut session = ChatSession::new();
        let turn = engine().respond(&mut session, Query::new("show me temp trends"));
        assert_eq!(turn.intent, Intent::Temperature);
        assert!(matches!(turn.payload, Some(Payload::Series(_))));
    }

    #[test]
    fn test_floats_turn_carries_three_records() {
        let mut session = ChatSession::new();
        let turn = engine().respond(&mut session, Query::new("where are the ARGO floats"));

        assert_eq!(turn.intent, Intent::Floats);
        match &turn.payload {
            Some(Payload::Floats(registry)) => assert_eq!(registry.len(), 3),
            other => panic!("expected floats payload, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_turn_gets_apology() {
        let mut session = ChatSession::new();
        let turn = engine().respond(&mut session, Query::new("hello"));

        assert_eq!(turn.intent, Intent::Unknown);
        assert_eq!(turn.reply, UNKNOWN_REPLY);
        assert!(turn.payload.is_none());
        assert!(turn.reply.contains("salinity"));
        assert!(turn.reply.contains("temperature"));
        assert!(turn.reply.contains("floats"));
    }

    #[test]
    fn test_one_turn_per_query_in_order() {
        let mut session = ChatSession::new();
        let mut engine = engine();

        engine.respond(&mut session, Query::new("salinity"));
        engine.respond(&mut session, Query::new("hello"));
        engine.respond(&mut session, Query::new("temp"));

        assert_eq!(session.len(), 3);
        let intents: Vec<Intent> = session.turns().iter().map(|t| t.intent).collect();
        assert_eq!(intents, vec![Intent::Salinity, Intent::Unknown, Intent::Temperature]);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = ChatEngine::seeded(7, 12);
        let mut b = ChatEngine::seeded(7, 12);
        let mut session_a = ChatSession::new();
        let mut session_b = ChatSession::new();

        let turn_a = a.respond(&mut session_a, Query::new("salinity?")).clone();
        let turn_b = b.respond(&mut session_b, Query::new("salinity?")).clone();

        match (turn_a.payload, turn_b.payload) {
            (Some(Payload::Series(sa)), Some(Payload::Series(sb))) => {
                let va: Vec<f64> = sa.points.iter().map(|p| p.value).collect();
                let vb: Vec<f64> = sb.points.iter().map(|p| p.value).collect();
                assert_eq!(va, vb);
            }
            other => panic!("expected two series payloads, got {:?}", other),
        }
    }
}
