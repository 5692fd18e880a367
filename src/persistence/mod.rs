use crate::attendance::AttendanceRecord;
use crate::event::Event;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    Csv(csv::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    InvalidData(String),
    NotFound,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            #[cfg(feature = "sqlite")]
            PersistenceError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            PersistenceError::NotFound => write!(f, "no calendar stored"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Document store for each student's attended-class set, keyed by roll
/// number. The core only consumes the already-loaded record; callers decide
/// when to persist.
pub trait AttendanceStore {
    fn save_attendance(&self, roll_no: u32, record: &AttendanceRecord) -> PersistenceResult<()>;
    fn load_attendance(&self, roll_no: u32) -> PersistenceResult<Option<AttendanceRecord>>;
}

/// Reject structurally broken override records on both save and load.
pub fn validate_events(events: &[Event]) -> PersistenceResult<()> {
    for event in events {
        if event.topic.trim().is_empty() {
            return Err(PersistenceError::InvalidData(format!(
                "event on {} has an empty topic",
                event.date
            )));
        }
        if event.department.trim().is_empty() && !event.is_holiday {
            return Err(PersistenceError::InvalidData(format!(
                "event '{}' on {} has an empty department",
                event.topic, event.date
            )));
        }
        if !event.is_holiday && event.start_time >= event.end_time {
            return Err(PersistenceError::InvalidData(format!(
                "event '{}' on {} has an inverted time range",
                event.topic, event.date
            )));
        }
    }
    Ok(())
}

pub mod file;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::{
    load_overrides_from_csv, load_overrides_from_json, save_overrides_to_csv,
    save_overrides_to_json,
};
