use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::intent::Intent;

/// Inclusive value range for generated measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    pub const SALINITY: ValueBounds = ValueBounds { min: 30.0, max: 40.0 };
    pub const TEMPERATURE: ValueBounds = ValueBounds { min: 15.0, max: 30.0 };

    /// Bounds for a profile intent; `None` for intents without a series
    pub fn for_intent(intent: Intent) -> Option<ValueBounds> {
        match intent {
            Intent::Salinity => Some(Self::SALINITY),
            Intent::Temperature => Some(Self::TEMPERATURE),
            Intent::Floats | Intent::Unknown => None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One dated measurement in a mock series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A synthetically generated time series standing in for real sensor data.
///
/// Points span a trailing daily window ending today, values drawn uniformly
/// from the intent's bounds. Display only; never persisted or compared
/// against real measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockSeries {
    /// Topic the series was generated for
    pub parameter: Intent,

    /// Bounds the values were drawn from
    pub bounds: ValueBounds,

    /// Ordered points, oldest first
    pub points: Vec<SeriesPoint>,
}

impl MockSeries {
    /// Generate `window` daily points ending today for a profile intent.
    ///
    /// Returns `None` for intents without a value range. The caller supplies
    /// the random source so tests can seed it.
    pub fn generate<R: Rng>(intent: Intent, window: usize, rng: &mut R) -> Option<MockSeries> {
        let bounds = ValueBounds::for_intent(intent)?;
        let today = Utc::now().date_naive();

        let points = (0..window)
            .map(|i| {
                let age = (window - 1 - i) as i64;
                SeriesPoint {
                    date: today - Duration::days(age),
                    value: rng.gen_range(bounds.min..=bounds.max),
                }
            })
            .collect();

        Some(MockSeries { parameter: intent, bounds, points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
