use anyhow::Result;
use oceanchat_core::config::LayeredConfig;
use oceanchat_core::models::{ChatSession, Payload, Query};

use crate::cli::AskArgs;
use crate::output::OutputWriter;
use crate::output_types::{AskOutput, FloatOutput, SeriesPointOutput};
use crate::render;
use crate::voice::{speak_reply, CommandSpeechSink};

pub fn execute(args: AskArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut engine = super::build_engine(config);
    let mut session = ChatSession::new();

    let turn = engine.respond(&mut session, Query::new(args.text)).clone();

    if output.is_json() {
        let (series, floats) = match &turn.payload {
            Some(Payload::Series(s)) => (
                Some(
                    s.points
                        .iter()
                        .map(|p| SeriesPointOutput { date: p.date, value: p.value })
                        .collect(),
                ),
                None,
            ),
            Some(Payload::Floats(registry)) => (
                None,
                Some(
                    registry
                        .records
                        .iter()
                        .map(|r| FloatOutput {
                            id: r.id.clone(),
                            lat: r.lat,
                            lon: r.lon,
                            region: r.region.clone(),
                        })
                        .collect(),
                ),
            ),
            None => (None, None),
        };

        return output.result(&AskOutput {
            query: turn.query.text().to_string(),
            intent: turn.intent,
            reply: turn.reply.clone(),
            series,
            floats,
        });
    }

    render::render_query(turn.query.text());
    render::render_turn(&turn, output);

    if args.voice || config.voice.value {
        match CommandSpeechSink::detect() {
            Ok(sink) => speak_reply(Some(&sink), &turn.reply, output),
            Err(e) => output.warning(e),
        }
    }

    Ok(())
}
