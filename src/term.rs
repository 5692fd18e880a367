use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed academic period that bounds every generated calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct TermError {
    message: String,
}

impl TermError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TermError {}

impl Term {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TermError> {
        let term = Self { start, end };
        term.validate()?;
        Ok(term)
    }

    pub fn validate(&self) -> Result<(), TermError> {
        if self.start > self.end {
            return Err(TermError::new(format!(
                "term start {} must be on or before term end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// 1-based week index counted from the term start.
    pub fn week_of(&self, date: NaiveDate) -> u32 {
        let days = (date - self.start).num_days().max(0);
        (days / 7 + 1) as u32
    }

    /// Weeks left until the term end. May be fractional or negative.
    pub fn remaining_weeks(&self, now: NaiveDate) -> f64 {
        (self.end - now).num_days() as f64 / 7.0
    }

    /// Every calendar day in the term, inclusive of both endpoints.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

impl Default for Term {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 11, 28).unwrap(),
        }
    }
}
