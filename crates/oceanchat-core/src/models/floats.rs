use geojson::{Feature, FeatureCollection, Geometry, Value as GeoValue};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// One fictitious ARGO float placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatRecord {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub region: String,
}

/// Fabricated instrument locations standing in for a real float feed.
///
/// The default snapshot is the fixed three-float set; `jittered` perturbs
/// positions slightly for callers that want per-turn variation. No
/// geolocation filtering happens anywhere, the full set is always returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatRegistry {
    pub records: Vec<FloatRecord>,
}

impl FloatRegistry {
    pub fn new(records: Vec<FloatRecord>) -> Self {
        Self { records }
    }

    /// Perturb each position by up to `max_degrees` in both axes
    pub fn jittered<R: Rng>(&self, max_degrees: f64, rng: &mut R) -> FloatRegistry {
        let records = self
            .records
            .iter()
            .map(|r| FloatRecord {
                id: r.id.clone(),
                lat: r.lat + rng.gen_range(-max_degrees..=max_degrees),
                lon: r.lon + rng.gen_range(-max_degrees..=max_degrees),
                region: r.region.clone(),
            })
            .collect();
        FloatRegistry { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// GeoJSON view for map renderers
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .records
            .iter()
            .map(|r| {
                let mut properties = Map::new();
                properties.insert("float_id".to_string(), JsonValue::from(r.id.clone()));
                properties.insert("region".to_string(), JsonValue::from(r.region.clone()));

                Feature {
                    geometry: Some(Geometry::new(GeoValue::Point(vec![r.lon, r.lat]))),
                    properties: Some(properties),
                    id: None,
                    bbox: None,
                    foreign_members: None,
                }
            })
            .collect();

        FeatureCollection { features, bbox: None, foreign_members: None }
    }
}

impl Default for FloatRegistry {
    fn default() -> Self {
        Self::new(vec![
            FloatRecord {
                id: "ARGO-1".to_string(),
                lat: 0.5,
                lon: 60.1,
                region: "Equator".to_string(),
            },
            FloatRecord {
                id: "ARGO-2".to_string(),
                lat: 15.3,
                lon: 72.5,
                region: "Arabian Sea".to_string(),
            },
            FloatRecord {
                id: "ARGO-3".to_string(),
                lat: -8.6,
                lon: 80.3,
                region: "Indian Ocean".to_string(),
            },
        ])
    }
}
