use attendance_tool::{Event, build_ics};
use chrono::{NaiveDate, NaiveTime};

fn event() -> Event {
    Event {
        date: NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
        start_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        department: "Forensic Medicine".to_string(),
        topic: "Revision - Firearm".to_string(),
        batch: vec!["A".to_string()],
        instructor: "Maj Manral".to_string(),
        location: "LH Sushruta".to_string(),
        is_holiday: false,
        is_generic: false,
    }
}

#[test]
fn ics_wraps_events_in_a_calendar_envelope() {
    let ics = build_ics(&[event()], 60);
    let lines: Vec<&str> = ics.split("\r\n").collect();
    assert_eq!(lines.first(), Some(&"BEGIN:VCALENDAR"));
    assert_eq!(lines.last(), Some(&"END:VCALENDAR"));
    assert!(lines.contains(&"VERSION:2.0"));
    assert!(lines.contains(&"CALSCALE:GREGORIAN"));
    assert!(lines.contains(&"METHOD:PUBLISH"));
    assert!(lines.iter().any(|line| line.starts_with("PRODID:") && line.contains("60")));
}

#[test]
fn each_event_becomes_one_stanza_with_local_timestamps() {
    let ics = build_ics(&[event()], 60);
    assert!(ics.contains("BEGIN:VEVENT"));
    assert!(ics.contains("SUMMARY:Revision - Firearm"));
    assert!(ics.contains("DTSTART;TZID=Asia/Kolkata:20250908T150000"));
    assert!(ics.contains("DTEND;TZID=Asia/Kolkata:20250908T160000"));
    assert!(ics.contains("LOCATION:LH Sushruta"));
    assert!(ics.contains("DESCRIPTION:DEPT: Forensic Medicine"));
    assert!(ics.contains("END:VEVENT"));
}

#[test]
fn empty_calendar_still_produces_a_valid_envelope() {
    let ics = build_ics(&[], 1);
    assert!(!ics.contains("VEVENT"));
    assert!(ics.starts_with("BEGIN:VCALENDAR"));
    assert!(ics.ends_with("END:VCALENDAR"));
}

#[test]
fn stanza_count_matches_event_count() {
    let events = vec![event(), event(), event()];
    let ics = build_ics(&events, 12);
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
    assert_eq!(ics.matches("END:VEVENT").count(), 3);
}
