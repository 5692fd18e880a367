use super::{PersistenceError, PersistenceResult};
use crate::event::Event;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

pub fn save_overrides_to_json<P: AsRef<Path>>(
    events: &[Event],
    path: P,
) -> PersistenceResult<()> {
    super::validate_events(events)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, events)?;
    Ok(())
}

pub fn load_overrides_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Event>> {
    let file = File::open(path)?;
    let events: Vec<Event> = serde_json::from_reader(file)?;
    super::validate_events(&events)?;
    Ok(events)
}

/// Flat string-shaped row for CSV interchange; parsing and formatting stay
/// in the helpers below so the record itself is mechanical.
#[derive(Default, Serialize, Deserialize)]
struct OverrideCsvRecord {
    date: String,
    start_time: String,
    end_time: String,
    department: String,
    topic: String,
    batch: String,
    instructor: String,
    location: String,
    is_holiday: String,
}

impl From<&Event> for OverrideCsvRecord {
    fn from(event: &Event) -> Self {
        Self {
            date: event.date.format("%Y-%m-%d").to_string(),
            start_time: event.start_time.format("%H:%M").to_string(),
            end_time: event.end_time.format("%H:%M").to_string(),
            department: event.department.clone(),
            topic: event.topic.clone(),
            batch: event.batch.join(";"),
            instructor: event.instructor.clone(),
            location: event.location.clone(),
            is_holiday: event.is_holiday.to_string(),
        }
    }
}

impl OverrideCsvRecord {
    fn into_event(self) -> PersistenceResult<Event> {
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        Ok(Event {
            date: parse_date(&self.date)?,
            start_time: parse_time(&self.start_time)?.unwrap_or(midnight),
            end_time: parse_time(&self.end_time)?.unwrap_or(midnight),
            department: self.department,
            topic: self.topic,
            batch: split_batch(&self.batch),
            instructor: non_empty_or(self.instructor, "TBD"),
            location: non_empty_or(self.location, "TBD"),
            is_holiday: parse_bool(&self.is_holiday)?,
            is_generic: false,
        })
    }
}

pub fn save_overrides_to_csv<P: AsRef<Path>>(events: &[Event], path: P) -> PersistenceResult<()> {
    super::validate_events(events)?;
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for event in events {
        writer.serialize(OverrideCsvRecord::from(event))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_overrides_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Event>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut events = Vec::new();
    for record in reader.deserialize::<OverrideCsvRecord>() {
        events.push(record?.into_event()?);
    }
    super::validate_events(&events)?;
    Ok(events)
}

fn parse_date(input: &str) -> PersistenceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| PersistenceError::InvalidData(format!("invalid date '{input}': {e}")))
}

fn parse_time(input: &str) -> PersistenceResult<Option<NaiveTime>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(Some)
        .map_err(|e| PersistenceError::InvalidData(format!("invalid time '{input}': {e}")))
}

fn parse_bool(input: &str) -> PersistenceResult<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" | "false" => Ok(false),
        "true" => Ok(true),
        other => Err(PersistenceError::InvalidData(format!(
            "invalid boolean '{other}'"
        ))),
    }
}

fn split_batch(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return vec!["ALL".to_string()];
    }
    input.split(';').map(|label| label.trim().to_string()).collect()
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
