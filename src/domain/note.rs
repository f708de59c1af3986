//! Note entity

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Textual timestamp format used in the persisted store
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single user-authored note.
///
/// Notes are owned by the repository, which assigns ids; `timestamp` always
/// reflects the most recent creation or edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

impl Note {
    /// Create a note stamped with the current local time
    pub(crate) fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Note {
            id,
            title: title.into(),
            body: body.into(),
            timestamp: now(),
        }
    }

    /// Replace title and body, re-stamping the modification time
    pub(crate) fn update(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.title = title.into();
        self.body = body.into();
        self.timestamp = now();
    }
}

/// Current local time truncated to whole seconds, the precision of the
/// persisted format. Truncating at stamp time keeps the in-memory value
/// identical to what a reload would produce.
fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Serde adapter for the fixed `YYYY-MM-DD HH:MM:SS` timestamp format
pub(crate) mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
