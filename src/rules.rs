use crate::event::hhmm;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Which term weeks a recurrence rule applies to: a contiguous inclusive
/// range or an explicit set of week numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekPredicate {
    Range { from: u32, to: u32 },
    Weeks(BTreeSet<u32>),
}

impl WeekPredicate {
    pub fn matches(&self, week: u32) -> bool {
        match self {
            WeekPredicate::Range { from, to } => week >= *from && week <= *to,
            WeekPredicate::Weeks(weeks) => weeks.contains(&week),
        }
    }

    /// First term week both predicates match, if any. Used to reject
    /// ambiguous alternatives at load time.
    pub fn first_overlap(&self, other: &WeekPredicate) -> Option<u32> {
        match (self, other) {
            (WeekPredicate::Range { from: a, to: b }, WeekPredicate::Range { from: c, to: d }) => {
                let start = (*a).max(*c);
                let end = (*b).min(*d);
                (start <= end).then_some(start)
            }
            (WeekPredicate::Range { .. }, WeekPredicate::Weeks(weeks))
            | (WeekPredicate::Weeks(weeks), WeekPredicate::Range { .. }) => {
                let range = if let WeekPredicate::Range { .. } = self {
                    self
                } else {
                    other
                };
                weeks.iter().copied().find(|week| range.matches(*week))
            }
            (WeekPredicate::Weeks(a), WeekPredicate::Weeks(b)) => {
                a.intersection(b).next().copied()
            }
        }
    }
}

/// One weekly-recurring class definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub topic: String,
    pub department: String,
    pub weeks: WeekPredicate,
}

/// A slot holds either one rule or an ordered list of alternatives whose
/// week predicates are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotRules {
    Single(RecurrenceRule),
    Alternatives(Vec<RecurrenceRule>),
}

impl SlotRules {
    pub fn candidates(&self) -> &[RecurrenceRule] {
        match self {
            SlotRules::Single(rule) => std::slice::from_ref(rule),
            SlotRules::Alternatives(rules) => rules,
        }
    }
}

/// A weekday time slot and the rule(s) that can fill it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRule {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    pub rules: SlotRules,
}

/// All slots for one weekday, numbered 1 (Monday) through 6 (Saturday).
/// Sunday is never a class day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRules {
    pub weekday: u8,
    pub slots: Vec<SlotRule>,
}

#[derive(Debug, Clone)]
pub struct RuleTableError {
    message: String,
}

impl RuleTableError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RuleTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuleTableError {}

/// Compact weekly recurrence ruleset for a whole term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    pub days: Vec<DayRules>,
}

impl RuleTable {
    pub fn new(days: Vec<DayRules>) -> Result<Self, RuleTableError> {
        let table = Self { days };
        table.validate()?;
        Ok(table)
    }

    pub fn for_weekday(&self, weekday: u8) -> Option<&DayRules> {
        self.days.iter().find(|day| day.weekday == weekday)
    }

    /// Rejects hand-authoring defects up front: out-of-range or duplicate
    /// weekdays, inverted time slots, and alternatives whose week
    /// predicates can match the same term week.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        let mut seen_weekdays = Vec::with_capacity(self.days.len());
        for day in &self.days {
            if day.weekday < 1 || day.weekday > 6 {
                return Err(RuleTableError::new(format!(
                    "weekday {} is outside 1 (Monday) through 6 (Saturday)",
                    day.weekday
                )));
            }
            if seen_weekdays.contains(&day.weekday) {
                return Err(RuleTableError::new(format!(
                    "weekday {} appears more than once",
                    day.weekday
                )));
            }
            seen_weekdays.push(day.weekday);

            for slot in &day.slots {
                if slot.start >= slot.end {
                    return Err(RuleTableError::new(format!(
                        "weekday {} slot {}-{} has an inverted time range",
                        day.weekday,
                        slot.start.format("%H:%M"),
                        slot.end.format("%H:%M")
                    )));
                }
                let candidates = slot.rules.candidates();
                for (i, first) in candidates.iter().enumerate() {
                    for second in &candidates[i + 1..] {
                        if let Some(week) = first.weeks.first_overlap(&second.weeks) {
                            return Err(RuleTableError::new(format!(
                                "weekday {} slot {} has alternatives '{}' and '{}' \
                                 both matching term week {}",
                                day.weekday,
                                slot.start.format("%H:%M"),
                                first.topic,
                                second.topic,
                                week
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
