//! Port trait definitions
//!
//! These traits define the collaborator seams around the chat core. The
//! responder itself never calls them; interaction loops own them and
//! downgrade their failures to user-visible warnings.

use crate::error::Result;
use crate::models::Query;

/// Port for spoken reply output (text-to-speech)
pub trait SpeechSink {
    /// Speak one reply. Failure must not affect the turn that produced it.
    fn speak(&self, text: &str) -> Result<()>;
}

/// Port for query input (typed prompt or speech-to-text)
pub trait QuerySource {
    /// Produce the next query, or `Ok(None)` when no query was captured
    /// this turn (unrecognized speech, end of input).
    fn next_query(&mut self) -> Result<Option<Query>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OceanChatError;

    /// Source that yields its script in order, then signals end of input
    struct ScriptedSource {
        queries: Vec<&'static str>,
    }

    impl QuerySource for ScriptedSource {
        fn next_query(&mut self) -> Result<Option<Query>> {
            if self.queries.is_empty() {
                return Ok(None);
            }
            Ok(Some(Query::new(self.queries.remove(0))))
        }
    }

    /// Source whose capture always fails, like a denied microphone
    struct DeadMicrophone;

    impl QuerySource for DeadMicrophone {
        fn next_query(&mut self) -> Result<Option<Query>> {
            Err(OceanChatError::SpeechNotRecognized {
                reason: "no audio captured".to_string(),
            })
        }
    }

    #[test]
    fn test_scripted_source_drains_then_ends() {
        let mut source = ScriptedSource { queries: vec!["salinity", "hello"] };

        assert_eq!(source.next_query().unwrap().unwrap().text(), "salinity");
        assert_eq!(source.next_query().unwrap().unwrap().text(), "hello");
        assert!(source.next_query().unwrap().is_none());
    }

    #[test]
    fn test_failed_capture_produces_no_query() {
        let mut source = DeadMicrophone;

        let err = source.next_query().unwrap_err();
        assert!(matches!(err, OceanChatError::SpeechNotRecognized { .. }));
        assert!(err.to_string().contains("no query"));
    }
}
