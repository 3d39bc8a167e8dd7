//! Calendar date value for scheduled tasks.
//!
//! # Responsibility
//! - Validate the `YYYY-MM-DD` string shape emitted by the calendar view.
//! - Keep the wire form identical to the persisted slot payload.
//!
//! # Invariants
//! - A constructed `TaskDate` round-trips byte-for-byte through serde.
//! - Month is 01..=12 and day is 01..=31; full calendar arithmetic stays out
//!   of the input surface.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date regex"));

/// Validation error for calendar date input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDateError {
    value: String,
}

impl Display for TaskDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid calendar date `{}`; expected YYYY-MM-DD",
            self.value
        )
    }
}

impl Error for TaskDateError {}

/// Calendar day attached to a task created from the calendar view.
///
/// Stored and serialized as the exact `YYYY-MM-DD` string the view emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDate(String);

impl TaskDate {
    /// Parses a `YYYY-MM-DD` string into a validated date value.
    ///
    /// # Errors
    /// - Returns `TaskDateError` when the shape does not match or the month
    ///   or day component is out of range.
    pub fn parse(value: &str) -> Result<Self, TaskDateError> {
        let caps = DATE_RE.captures(value).ok_or_else(|| invalid(value))?;
        // Captures are digit-only by construction; a failed parse can only
        // mean out-of-range, which the checks below reject anyway.
        let month: u32 = caps[2].parse().unwrap_or(0);
        let day: u32 = caps[3].parse().unwrap_or(0);
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(invalid(value));
        }

        Ok(Self(value.to_string()))
    }

    /// Returns the `YYYY-MM-DD` string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskDate {
    type Error = TaskDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaskDate> for String {
    fn from(value: TaskDate) -> Self {
        value.0
    }
}

impl Display for TaskDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid(value: &str) -> TaskDateError {
    TaskDateError {
        value: value.to_string(),
    }
}
