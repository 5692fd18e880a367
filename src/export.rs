use crate::event::Event;
use chrono::{NaiveDate, NaiveTime};

/// Render a personalized calendar as RFC 5545 text, one VEVENT per event,
/// CRLF-terminated. Pure string synthesis; writing the file is the caller's
/// concern.
pub fn build_ics(events: &[Event], roll_no: u32) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:-//Attendance Planner//Roll {roll_no}//EN"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];

    for event in events {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("SUMMARY:{}", event.topic));
        lines.push(format!(
            "DTSTART;TZID=Asia/Kolkata:{}",
            ics_stamp(event.date, event.start_time)
        ));
        lines.push(format!(
            "DTEND;TZID=Asia/Kolkata:{}",
            ics_stamp(event.date, event.end_time)
        ));
        lines.push(format!("LOCATION:{}", event.location));
        lines.push(format!("DESCRIPTION:DEPT: {}", event.department));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\r\n")
}

fn ics_stamp(date: NaiveDate, time: NaiveTime) -> String {
    format!("{}T{}00", date.format("%Y%m%d"), time.format("%H%M"))
}
