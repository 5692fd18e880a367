use crate::department::DepartmentAliases;
use crate::event::{Event, SlotKey};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Combine generated events with authoritative overrides into one calendar.
///
/// Departments on both inputs are normalized first so merge keys compare.
/// Any date carrying a holiday override loses its entire generic day; a
/// non-holiday override replaces the generic event at the same
/// `(date, start, department)` slot. The result is unordered; use
/// [`sort_calendar`] for stable presentation.
pub fn merge(
    generic: &[Event],
    overrides: &[Event],
    aliases: &DepartmentAliases,
) -> Vec<Event> {
    let holiday_dates: HashSet<NaiveDate> = overrides
        .iter()
        .filter(|event| event.is_holiday)
        .map(|event| event.date)
        .collect();

    let mut merged: HashMap<SlotKey, Event> = HashMap::new();

    for event in generic {
        if holiday_dates.contains(&event.date) {
            continue;
        }
        let event = normalized(event, aliases);
        merged.insert(SlotKey::for_event(&event), event);
    }

    for event in overrides {
        let event = normalized(event, aliases);
        merged.insert(SlotKey::for_event(&event), event);
    }

    merged.into_values().collect()
}

fn normalized(event: &Event, aliases: &DepartmentAliases) -> Event {
    let mut event = event.clone();
    event.department = aliases.normalize(&event.department);
    event
}

/// Sort ascending by date then start time, remaining ties broken
/// lexicographically so repeated runs render identically.
pub fn sort_calendar(events: &mut [Event]) {
    events.sort_by(|a, b| {
        (a.date, a.start_time, &a.department, &a.topic).cmp(&(
            b.date,
            b.start_time,
            &b.department,
            &b.topic,
        ))
    });
}
