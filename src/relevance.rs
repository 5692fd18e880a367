use crate::batch::BatchConfig;
use crate::event::Event;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Attendance-counting category for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttendanceKind {
    Theory,
    Practical,
}

impl AttendanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceKind::Theory => "Theory",
            AttendanceKind::Practical => "Practical",
        }
    }
}

impl fmt::Display for AttendanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-department classification policy. This is configuration, not code:
/// the keyword tables differ by department and change between terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Departments whose classes count toward attendance at all.
    tracked: BTreeSet<String>,
    /// Department -> lower-cased topic keywords that mark a class Practical.
    practical_keywords: BTreeMap<String, Vec<String>>,
    /// Topic keyword that routes visibility through the clinic batch.
    clinic_topic_keyword: String,
}

impl ClassifierConfig {
    pub fn new(
        tracked: impl IntoIterator<Item = String>,
        practical_keywords: impl IntoIterator<Item = (String, Vec<String>)>,
        clinic_topic_keyword: impl Into<String>,
    ) -> Self {
        Self {
            tracked: tracked.into_iter().collect(),
            practical_keywords: practical_keywords
                .into_iter()
                .map(|(department, keywords)| {
                    let keywords = keywords
                        .into_iter()
                        .map(|keyword| keyword.to_lowercase())
                        .collect();
                    (department, keywords)
                })
                .collect(),
            clinic_topic_keyword: clinic_topic_keyword.into().to_lowercase(),
        }
    }

    pub fn is_tracked(&self, department: &str) -> bool {
        self.tracked.contains(department)
    }

    pub fn tracked_departments(&self) -> impl Iterator<Item = &str> {
        self.tracked.iter().map(String::as_str)
    }

    /// Keyword match over the lower-cased topic; no keyword hit, or a
    /// department without a keyword list, defaults to Theory.
    pub fn classify(&self, event: &Event) -> AttendanceKind {
        let topic = event.topic.to_lowercase();
        match self.practical_keywords.get(&event.department) {
            Some(keywords) if keywords.iter().any(|keyword| topic.contains(keyword.as_str())) => {
                AttendanceKind::Practical
            }
            _ => AttendanceKind::Theory,
        }
    }

    fn is_clinic_topic(&self, event: &Event) -> bool {
        event
            .topic
            .to_lowercase()
            .contains(self.clinic_topic_keyword.as_str())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        let dept = |name: &str| name.to_string();
        Self::new(
            [
                dept("Community Medicine"),
                dept("Forensic Medicine"),
                dept("ENT"),
                dept("Ophthalmology"),
            ],
            [
                (
                    dept("Community Medicine"),
                    vec!["clinic".to_string(), "tutorial".to_string()],
                ),
                (dept("Forensic Medicine"), vec!["tutorial".to_string()]),
                (dept("ENT"), vec!["clinic".to_string()]),
                (dept("Ophthalmology"), vec!["clinic".to_string()]),
            ],
            "clinic",
        )
    }
}

/// Whether a student is expected to attend an event.
///
/// Holidays and untracked departments are never relevant. Clinic-topic
/// events gate on the student's clinic batch being named in the event's
/// batch set; everything else admits the wildcard set or the student's
/// general batch. A roll number outside the configured partitions excludes
/// the student from every cohort-gated event.
pub fn is_relevant(
    event: &Event,
    roll_no: u32,
    classifier: &ClassifierConfig,
    batches: &BatchConfig,
) -> bool {
    if event.is_holiday || !classifier.is_tracked(&event.department) {
        return false;
    }
    if classifier.is_clinic_topic(event) {
        match batches.clinic_batch(roll_no) {
            Some(batch) => event.batch.iter().any(|label| label == batch.as_str()),
            None => false,
        }
    } else {
        let general = batches.general_batch(roll_no);
        event.open_to_all()
            || general
                .map(|batch| event.batch.iter().any(|label| label == batch.as_str()))
                .unwrap_or(false)
    }
}

/// The subset of a calendar a given student is expected to attend.
pub fn relevant_events(
    events: &[Event],
    roll_no: u32,
    classifier: &ClassifierConfig,
    batches: &BatchConfig,
) -> Vec<Event> {
    events
        .iter()
        .filter(|event| is_relevant(event, roll_no, classifier, batches))
        .cloned()
        .collect()
}
