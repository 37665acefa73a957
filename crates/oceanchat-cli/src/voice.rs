//! Spoken reply output via the system TTS command
//!
//! Playback is best-effort: callers downgrade every failure to a warning,
//! a turn never fails because audio did.

use std::process::{Command, Stdio};

use oceanchat_core::error::{OceanChatError, Result};
use oceanchat_core::ports::SpeechSink;

use crate::output::OutputWriter;

/// TTS commands probed in order; the first one present wins
const TTS_COMMANDS: &[&str] = &["say", "espeak", "spd-say"];

/// Speech sink backed by whichever system TTS command is installed
pub struct CommandSpeechSink {
    command: String,
}

impl CommandSpeechSink {
    /// Probe for an installed TTS command
    pub fn detect() -> Result<Self> {
        for candidate in TTS_COMMANDS {
            let found = Command::new("which")
                .arg(candidate)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map(|s| s.success())
                .unwrap_or(false);

            if found {
                return Ok(Self { command: candidate.to_string() });
            }
        }

        Err(OceanChatError::VoiceUnavailable {
            reason: "no TTS command found".to_string(),
            remediation: format!("install one of {}", TTS_COMMANDS.join(", ")),
        })
    }
}

impl SpeechSink for CommandSpeechSink {
    fn speak(&self, text: &str) -> Result<()> {
        let status = Command::new(&self.command)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| OceanChatError::VoiceUnavailable {
                reason: format!("{} failed to start: {}", self.command, e),
                remediation: "check the TTS command is on PATH".to_string(),
            })?;

        if !status.success() {
            return Err(OceanChatError::VoiceUnavailable {
                reason: format!("{} exited with {}", self.command, status),
                remediation: "check audio output is available".to_string(),
            });
        }

        Ok(())
    }
}

/// Speak a reply if voice is enabled, downgrading failure to a warning
pub fn speak_reply(sink: Option<&CommandSpeechSink>, text: &str, output: &OutputWriter) {
    if let Some(sink) = sink {
        if let Err(e) = sink.speak(text) {
            output.warning(e);
        }
    }
}
