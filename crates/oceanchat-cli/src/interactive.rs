use dialoguer::Input;
use oceanchat_core::error::{OceanChatError, Result};
use oceanchat_core::models::Query;
use oceanchat_core::ports::QuerySource;

/// Query source backed by a terminal prompt.
///
/// Stands in for the prototype's text box and microphone button: each call
/// yields one typed query, and `None` when the user is done.
pub struct PromptSource {
    prompt: String,
}

impl PromptSource {
    pub fn new() -> Self {
        Self { prompt: "You".to_string() }
    }
}

impl Default for PromptSource {
    fn default() -> Self {
        Self::new()
    }
}

impl QuerySource for PromptSource {
    fn next_query(&mut self) -> Result<Option<Query>> {
        let text: String = Input::new()
            .with_prompt(&self.prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| OceanChatError::SpeechNotRecognized { reason: e.to_string() })?;

        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("exit")
            || trimmed.eq_ignore_ascii_case("quit")
        {
            return Ok(None);
        }

        Ok(Some(Query::new(trimmed)))
    }
}
