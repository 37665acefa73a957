//! Presentation helpers for chat turns
//!
//! Everything here is display-only: series payloads render as a sparkline
//! plus a table, float payloads as a table, in place of the prototype's
//! chart and map widgets.

use console::style;
use oceanchat_core::models::{ChatTurn, FloatRegistry, MockSeries, Payload};
use tabled::Tabled;

use crate::output::OutputWriter;

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct FloatRow {
    #[tabled(rename = "FloatID")]
    id: String,
    #[tabled(rename = "Lat")]
    lat: f64,
    #[tabled(rename = "Lon")]
    lon: f64,
    #[tabled(rename = "Region")]
    region: String,
}

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Map series values onto eight spark levels using the intent's bounds
pub fn sparkline(series: &MockSeries) -> String {
    let span = series.bounds.max - series.bounds.min;
    series
        .points
        .iter()
        .map(|p| {
            let normalized = ((p.value - series.bounds.min) / span).clamp(0.0, 1.0);
            let idx = (normalized * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
            SPARK_LEVELS[idx]
        })
        .collect()
}

/// Print one bot reply plus its payload
pub fn render_turn(turn: &ChatTurn, output: &OutputWriter) {
    println!("{} {}", style("🤖").bold(), turn.reply);

    match &turn.payload {
        Some(Payload::Series(series)) => render_series(series, output),
        Some(Payload::Floats(registry)) => render_floats(registry, output),
        None => {}
    }
}

pub fn render_series(series: &MockSeries, output: &OutputWriter) {
    println!(
        "   {} {}",
        style(format!("{} over time:", series.parameter.topic())).dim(),
        sparkline(series)
    );

    let rows: Vec<SeriesRow> = series
        .points
        .iter()
        .map(|p| SeriesRow {
            date: p.date.to_string(),
            value: format!("{:.2}", p.value),
        })
        .collect();
    output.table(rows);
}

pub fn render_floats(registry: &FloatRegistry, output: &OutputWriter) {
    let rows: Vec<FloatRow> = registry
        .records
        .iter()
        .map(|r| FloatRow {
            id: r.id.clone(),
            lat: r.lat,
            lon: r.lon,
            region: r.region.clone(),
        })
        .collect();
    output.table(rows);
}

/// Print the user side of a turn, transcript style
pub fn render_query(text: &str) {
    println!("{} {}", style("🧑").bold(), style(text).cyan());
}

#[cfg(test)]
mod tests {
    use super::*;
    use oceanchat_core::models::Intent;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sparkline_length_matches_series() {
        let mut rng = StdRng::seed_from_u64(11);
        let series = MockSeries::generate(Intent::Salinity, 12, &mut rng).unwrap();

        let spark = sparkline(&series);
        assert_eq!(spark.chars().count(), 12);
        assert!(spark.chars().all(|c| SPARK_LEVELS.contains(&c)));
    }
}
