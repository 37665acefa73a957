use chrono::{DateTime, NaiveDate, Utc};
use geojson::FeatureCollection;
use oceanchat_core::models::{ChatTurn, Intent, Payload, SessionId};
use serde::Serialize;

/// One dated value of a mock series
#[derive(Debug, Serialize)]
pub struct SeriesPointDto {
    pub date: NaiveDate,
    pub value: f64,
}

/// Float payload: tabular records plus a GeoJSON view for map renderers
#[derive(Debug, Serialize)]
pub struct FloatsDto {
    pub records: Vec<FloatRecordDto>,
    pub geojson: FeatureCollection,
}

#[derive(Debug, Serialize)]
pub struct FloatRecordDto {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub region: String,
}

/// Response for one chat turn
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub intent: Intent,
    pub reply: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<SeriesPointDto>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub floats: Option<FloatsDto>,

    /// Collaborator failures surfaced as warnings, never as errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ChatResponse {
    pub fn from_turn(turn: &ChatTurn, warning: Option<String>) -> Self {
        let (series, floats) = match &turn.payload {
            Some(Payload::Series(series)) => (
                Some(
                    series
                        .points
                        .iter()
                        .map(|p| SeriesPointDto { date: p.date, value: p.value })
                        .collect(),
                ),
                None,
            ),
            Some(Payload::Floats(registry)) => (
                None,
                Some(FloatsDto {
                    records: registry
                        .records
                        .iter()
                        .map(|r| FloatRecordDto {
                            id: r.id.clone(),
                            lat: r.lat,
                            lon: r.lon,
                            region: r.region.clone(),
                        })
                        .collect(),
                    geojson: registry.to_feature_collection(),
                }),
            ),
            None => (None, None),
        };

        Self {
            intent: turn.intent,
            reply: turn.reply.clone(),
            series,
            floats,
            warning,
        }
    }
}

/// One transcript entry
#[derive(Debug, Serialize)]
pub struct TurnDto {
    pub query: String,
    pub intent: Intent,
    pub reply: String,
    pub has_payload: bool,
    pub at: DateTime<Utc>,
}

/// The ordered session transcript
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub session_id: SessionId,
    pub started_at: DateTime<Utc>,
    pub turns: Vec<TurnDto>,
}

impl TurnDto {
    pub fn from_turn(turn: &ChatTurn) -> Self {
        Self {
            query: turn.query.text().to_string(),
            intent: turn.intent,
            reply: turn.reply.clone(),
            has_payload: turn.payload.is_some(),
            at: turn.at,
        }
    }
}
