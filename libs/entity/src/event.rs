use chrono::{DateTime, Utc};

/// A single calendar entry. `time` is always UTC; the store assigns `id`.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Event {
    pub id: i32,
    pub description: String,
    pub time: DateTime<Utc>,
}
