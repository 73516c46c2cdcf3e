use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of entries kept in the query history.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Storage key under which the history log is persisted.
pub const HISTORY_STORAGE_KEY: &str = "queryHistory";

/// A single recorded OSINT query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Target hostname, not the raw user input.
    pub url: String,
    /// Human-readable label of the query type.
    #[serde(rename = "type")]
    pub query_type: String,
    pub query_url: String,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

/// Input to `append`: everything but the timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewHistoryEntry {
    pub url: String,
    #[serde(rename = "type")]
    pub query_type: String,
    pub query_url: String,
}

impl NewHistoryEntry {
    pub fn new(url: &str, query_type: &str, query_url: &str) -> Self {
        Self {
            url: url.to_string(),
            query_type: query_type.to_string(),
            query_url: query_url.to_string(),
        }
    }
}

/// Newest-first sequence of history entries.
pub type HistoryLog = Vec<HistoryEntry>;

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2024-05-01T12:00:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
