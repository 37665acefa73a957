use anyhow::Result;
use console::style;
use oceanchat_core::config::LayeredConfig;
use oceanchat_core::models::ChatSession;
use oceanchat_core::ports::QuerySource;

use crate::cli::ChatArgs;
use crate::interactive::PromptSource;
use crate::output::OutputWriter;
use crate::render;
use crate::voice::{speak_reply, CommandSpeechSink};

pub fn execute(args: ChatArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    println!("\n🌊 OceanChat — ask about salinity, temperature, or floats");
    println!("{}\n", style("(empty line, 'exit' or 'quit' to leave)").dim());

    let mut engine = super::build_engine(config);
    let mut session = ChatSession::new();
    let mut source = PromptSource::new();

    // Voice is best-effort: a missing TTS command downgrades to text-only
    // with one warning up front.
    let sink = if args.voice || config.voice.value {
        match CommandSpeechSink::detect() {
            Ok(sink) => Some(sink),
            Err(e) => {
                output.warning(e);
                None
            }
        }
    } else {
        None
    };

    loop {
        // A failed capture ends the session; no query, no turn
        let query = match source.next_query() {
            Ok(Some(query)) => query,
            Ok(None) => break,
            Err(e) => {
                output.warning(e);
                break;
            }
        };

        let turn = engine.respond(&mut session, query);
        render::render_turn(turn, output);

        let reply = turn.reply.clone();
        speak_reply(sink.as_ref(), &reply, output);
    }

    println!(
        "\n{}",
        style(format!("Session {} ended after {} turns", session.id.0, session.len())).dim()
    );

    Ok(())
}
