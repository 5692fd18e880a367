use crate::attendance::{AttendanceRecord, Projection, Summary, project, summarize};
use crate::batch::{BatchConfig, PartitionError};
use crate::department::DepartmentAliases;
use crate::event::Event;
use crate::expand::expand;
use crate::merge::{merge, sort_calendar};
use crate::relevance::{ClassifierConfig, relevant_events};
use crate::rules::{RuleTable, RuleTableError};
use crate::term::{Term, TermError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable configuration for one academic term: dates, recurrence rules,
/// alias and classification tables, and both batch partitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub term: Term,
    pub rules: RuleTable,
    pub aliases: DepartmentAliases,
    pub classifier: ClassifierConfig,
    pub batches: BatchConfig,
}

#[derive(Debug, Clone)]
pub enum ConfigError {
    Term(TermError),
    Rules(RuleTableError),
    Batches(PartitionError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Term(err) => write!(f, "term configuration error: {err}"),
            ConfigError::Rules(err) => write!(f, "rule table error: {err}"),
            ConfigError::Batches(err) => write!(f, "batch partition error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<TermError> for ConfigError {
    fn from(value: TermError) -> Self {
        Self::Term(value)
    }
}

impl From<RuleTableError> for ConfigError {
    fn from(value: RuleTableError) -> Self {
        Self::Rules(value)
    }
}

impl From<PartitionError> for ConfigError {
    fn from(value: PartitionError) -> Self {
        Self::Batches(value)
    }
}

/// A student's attendance position and outlook at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentOutlook {
    pub summary: Summary,
    pub projection: Projection,
}

/// Façade over the synthesis pipeline. Holds validated configuration and
/// exposes the pure transforms; it performs no I/O and keeps no mutable
/// state, so concurrent use over different inputs is trivially safe.
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Validate the hand-authored tables up front rather than absorbing
    /// their defects at expansion time.
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.term.validate()?;
        config.rules.validate()?;
        config.batches.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn term(&self) -> &Term {
        &self.config.term
    }

    /// Expand the ruleset over the term, reconcile it with the overrides,
    /// and return the canonical calendar sorted for presentation.
    pub fn build_calendar(&self, overrides: &[Event]) -> Vec<Event> {
        let generic = expand(&self.config.rules, &self.config.term);
        let mut merged = merge(&generic, overrides, &self.config.aliases);
        sort_calendar(&mut merged);
        merged
    }

    pub fn relevant_events(&self, calendar: &[Event], roll_no: u32) -> Vec<Event> {
        relevant_events(calendar, roll_no, &self.config.classifier, &self.config.batches)
    }

    pub fn outlook(
        &self,
        calendar: &[Event],
        roll_no: u32,
        record: &AttendanceRecord,
        target_percent: Option<u32>,
        now: NaiveDate,
    ) -> StudentOutlook {
        let relevant = self.relevant_events(calendar, roll_no);
        let summary = summarize(&relevant, record, &self.config.classifier, now);
        let projection = project(&summary, target_percent, now, self.config.term.end());
        StudentOutlook {
            summary,
            projection,
        }
    }
}
