use chrono::NaiveDate;
use oceanchat_core::models::Intent;
use serde::Serialize;

/// Output for the ask command
#[derive(Debug, Serialize)]
pub struct AskOutput {
    pub query: String,
    pub intent: Intent,
    pub reply: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<SeriesPointOutput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub floats: Option<Vec<FloatOutput>>,
}

#[derive(Debug, Serialize)]
pub struct SeriesPointOutput {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct FloatOutput {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub region: String,
}

/// Output for the floats command
#[derive(Debug, Serialize)]
pub struct FloatsOutput {
    pub floats: Vec<FloatOutput>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub geojson: Option<geojson::FeatureCollection>,
}

/// Output for the config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub entries: Vec<ConfigEntryOutput>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntryOutput {
    pub key: String,
    pub value: String,
    pub source: String,
}
