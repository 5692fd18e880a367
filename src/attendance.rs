use crate::event::Event;
use crate::relevance::{AttendanceKind, ClassifierConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Target attendance percentage used when none is supplied.
pub const DEFAULT_TARGET_PERCENT: u32 = 75;

/// Event identities a student has personally marked attended. The core never
/// mutates a record on its own; the caller decides when to toggle and when
/// to persist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    attended: BTreeSet<String>,
}

impl AttendanceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_identities(identities: impl IntoIterator<Item = String>) -> Self {
        Self {
            attended: identities.into_iter().collect(),
        }
    }

    pub fn mark(&mut self, identity: impl Into<String>) {
        self.attended.insert(identity.into());
    }

    pub fn unmark(&mut self, identity: &str) {
        self.attended.remove(identity);
    }

    /// Flip one identity; returns the new membership state.
    pub fn toggle(&mut self, identity: impl Into<String>) -> bool {
        let identity = identity.into();
        if self.attended.remove(&identity) {
            false
        } else {
            self.attended.insert(identity);
            true
        }
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.attended.contains(identity)
    }

    pub fn len(&self) -> usize {
        self.attended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attended.is_empty()
    }

    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.attended.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub total: u32,
    pub attended: u32,
}

impl Tally {
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.attended as f64 / self.total as f64) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentTally {
    pub theory: Tally,
    pub practical: Tally,
}

impl DepartmentTally {
    pub fn for_kind(&self, kind: AttendanceKind) -> &Tally {
        match kind {
            AttendanceKind::Theory => &self.theory,
            AttendanceKind::Practical => &self.practical,
        }
    }

    fn for_kind_mut(&mut self, kind: AttendanceKind) -> &mut Tally {
        match kind {
            AttendanceKind::Theory => &mut self.theory,
            AttendanceKind::Practical => &mut self.practical,
        }
    }
}

/// Held/attended tallies per department and kind over past events, plus the
/// count of upcoming relevant events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub departments: BTreeMap<String, DepartmentTally>,
    pub upcoming: u32,
}

impl Summary {
    /// Held and attended totals across every department and kind.
    pub fn totals(&self) -> Tally {
        let mut totals = Tally::default();
        for tally in self.departments.values() {
            for kind in [AttendanceKind::Theory, AttendanceKind::Practical] {
                let part = tally.for_kind(kind);
                totals.total += part.total;
                totals.attended += part.attended;
            }
        }
        totals
    }

    pub fn to_cli_summary(&self) -> String {
        let totals = self.totals();
        format!(
            "held={}, attended={}, upcoming={}, departments={}",
            totals.total,
            totals.attended,
            self.upcoming,
            self.departments.len()
        )
    }
}

/// Tally a student's relevant events against their attendance record.
///
/// Events strictly before `now` count as held; the rest count as upcoming.
/// `now` is threaded explicitly so the whole computation is deterministic.
pub fn summarize(
    relevant: &[Event],
    record: &AttendanceRecord,
    classifier: &ClassifierConfig,
    now: NaiveDate,
) -> Summary {
    let mut summary = Summary::default();
    for event in relevant {
        if event.date >= now {
            summary.upcoming += 1;
            continue;
        }
        let kind = classifier.classify(event);
        let tally = summary
            .departments
            .entry(event.department.clone())
            .or_default()
            .for_kind_mut(kind);
        tally.total += 1;
        if record.contains(&event.identity()) {
            tally.attended += 1;
        }
    }
    summary
}

/// Forward projection outcome for the weeks axis. `Unattainable` replaces
/// the ambiguous zero a naive rate division would produce when no upcoming
/// classes remain but more attendance is still required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeeksNeeded {
    AlreadyMet,
    Within(u32),
    Unattainable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub target_percent: u32,
    pub classes_needed: u32,
    pub weeks_needed: WeeksNeeded,
}

/// Classes and weeks required to reach the target percentage by term end.
///
/// A missing or out-of-range target clamps to [`DEFAULT_TARGET_PERCENT`].
pub fn project(
    summary: &Summary,
    target_percent: Option<u32>,
    now: NaiveDate,
    term_end: NaiveDate,
) -> Projection {
    let target = target_percent
        .filter(|percent| *percent <= 100)
        .unwrap_or(DEFAULT_TARGET_PERCENT);

    let totals = summary.totals();
    let total_for_term = totals.total + summary.upcoming;
    let required = ((target as f64 / 100.0) * total_for_term as f64).ceil() as u32;
    let classes_needed = required.saturating_sub(totals.attended);

    let weeks_needed = if classes_needed == 0 {
        WeeksNeeded::AlreadyMet
    } else {
        let remaining_weeks = (term_end - now).num_days() as f64 / 7.0;
        let per_week = if remaining_weeks > 0.0 {
            summary.upcoming as f64 / remaining_weeks
        } else {
            0.0
        };
        if per_week > 0.0 {
            WeeksNeeded::Within((classes_needed as f64 / per_week).ceil() as u32)
        } else {
            WeeksNeeded::Unattainable
        }
    };

    Projection {
        target_percent: target,
        classes_needed,
        weeks_needed,
    }
}
