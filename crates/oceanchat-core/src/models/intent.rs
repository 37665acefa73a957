use serde::{Deserialize, Serialize};

/// Classified purpose of a user query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Salinity,
    Temperature,
    Floats,
    Unknown,
}

impl Intent {
    /// Human-readable topic name used in reply text
    pub fn topic(&self) -> &'static str {
        match self {
            Intent::Salinity => "salinity",
            Intent::Temperature => "temperature",
            Intent::Floats => "floats",
            Intent::Unknown => "unknown",
        }
    }

    /// Whether this intent carries a time-series payload
    pub fn is_profile(&self) -> bool {
        matches!(self, Intent::Salinity | Intent::Temperature)
    }
}

/// One keyword rule in the classification policy
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    /// Keywords that trigger this rule (case-insensitive substring match)
    pub keywords: &'static [&'static str],

    /// Intent assigned when any keyword matches
    pub intent: Intent,
}

/// Classification policy, evaluated in priority order. The first rule with
/// a matching keyword wins, so a query mentioning both salinity and floats
/// classifies as `Salinity`.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule { keywords: &["salinity"], intent: Intent::Salinity },
    IntentRule { keywords: &["temperature", "temp"], intent: Intent::Temperature },
    IntentRule { keywords: &["float", "location"], intent: Intent::Floats },
];

/// Classify raw query text into an [`Intent`].
///
/// Pure and total: depends only on the text, never fails, and unmatched
/// input (including the empty string) classifies to `Unknown`.
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();

    for rule in INTENT_RULES {
        if rule.keywords.iter().any(|kw| lowered.contains(kw)) {
            return rule.intent;
        }
    }

    Intent::Unknown
}
