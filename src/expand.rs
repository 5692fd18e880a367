use crate::event::{ALL_BATCHES, Event};
use crate::rules::RuleTable;
use crate::term::Term;
use chrono::{Datelike, Weekday};

/// Expand a weekly ruleset into concrete dated events for the whole term.
///
/// Walks every calendar day, skips Sundays, and emits one generic event per
/// rule whose week predicate matches the day's term week. If a misconfigured
/// table lets several alternatives match the same week, all are emitted; the
/// merger's key collapse is the only safety net. Output order is iteration
/// order over days then slots; callers sort when presentation order matters.
pub fn expand(rules: &RuleTable, term: &Term) -> Vec<Event> {
    let mut events = Vec::new();
    for day in term.days() {
        if day.weekday() == Weekday::Sun {
            continue;
        }
        let weekday = day.weekday().number_from_monday() as u8;
        let Some(day_rules) = rules.for_weekday(weekday) else {
            continue;
        };
        let week = term.week_of(day);
        for slot in &day_rules.slots {
            for rule in slot.rules.candidates() {
                if rule.weeks.matches(week) {
                    events.push(Event {
                        date: day,
                        start_time: slot.start,
                        end_time: slot.end,
                        department: rule.department.clone(),
                        topic: rule.topic.clone(),
                        batch: vec![ALL_BATCHES.to_string()],
                        instructor: "TBD".to_string(),
                        location: "TBD".to_string(),
                        is_holiday: false,
                        is_generic: true,
                    });
                }
            }
        }
    }
    events
}
