pub mod chat;
pub mod floats;
pub mod intent;
pub mod series;

pub use chat::{ChatSession, ChatTurn, Payload, Query, SessionId};
pub use floats::{FloatRecord, FloatRegistry};
pub use intent::{classify, Intent, IntentRule, INTENT_RULES};
pub use series::{MockSeries, SeriesPoint, ValueBounds};
