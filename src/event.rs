use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Wildcard batch label that makes an event visible to every student.
pub const ALL_BATCHES: &str = "ALL";

const TBD: &str = "TBD";

/// One scheduled class occurrence.
///
/// Field names and formats follow the external override store: camelCase
/// keys, ISO dates, and `HH:MM` clock times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub department: String,
    pub topic: String,
    #[serde(default = "default_batch")]
    pub batch: Vec<String>,
    #[serde(default = "default_tbd")]
    pub instructor: String,
    #[serde(default = "default_tbd")]
    pub location: String,
    #[serde(default)]
    pub is_holiday: bool,
    /// True for events produced by recurrence expansion; override records
    /// from the store never carry this flag.
    #[serde(default)]
    pub is_generic: bool,
}

fn default_batch() -> Vec<String> {
    vec![ALL_BATCHES.to_string()]
}

fn default_tbd() -> String {
    TBD.to_string()
}

impl Event {
    /// Deterministic key naming "the same class": two events are identical
    /// for merge and attendance purposes iff this string matches.
    pub fn identity(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.date.format("%Y-%m-%d"),
            self.start_time.format("%H:%M"),
            self.department,
            self.topic
        )
    }

    /// True when the batch set names the wildcard label.
    pub fn open_to_all(&self) -> bool {
        self.batch.iter().any(|label| label == ALL_BATCHES)
    }
}

/// Merge-map key. Holidays occupy their own namespace so that several
/// holidays on one date never collide with each other or with class slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotKey {
    Class {
        date: NaiveDate,
        start: NaiveTime,
        department: String,
    },
    Holiday {
        date: NaiveDate,
        topic: String,
    },
}

impl SlotKey {
    pub fn for_event(event: &Event) -> Self {
        if event.is_holiday {
            SlotKey::Holiday {
                date: event.date,
                topic: event.topic.clone(),
            }
        } else {
            SlotKey::Class {
                date: event.date,
                start: event.start_time,
                department: event.department.clone(),
            }
        }
    }
}

/// Serde adapter for `HH:MM` clock times; accepts a trailing seconds field
/// on input for tolerance toward hand-authored records.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        NaiveTime::parse_from_str(trimmed, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map_err(|err| de::Error::custom(format!("invalid clock time '{raw}': {err}")))
    }
}
