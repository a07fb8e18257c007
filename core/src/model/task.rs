use std::fmt;
use std::sync::OnceLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn date_shape_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"))
}

/// What a task asks the student to do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDescription(String);

impl TaskDescription {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Task description should not be blank";

    pub fn is_valid(raw: &str) -> bool {
        !raw.trim().is_empty()
    }

    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(raw) {
            return Err(ValidationError::new(
                "task description",
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(raw.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TaskDescription {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TaskDescription> for String {
    fn from(value: TaskDescription) -> Self {
        value.0
    }
}

/// Due date of a task.
///
/// The value itself only has to be a real calendar date so that stored tasks
/// whose deadline has passed still load. The not-in-the-past rule is applied
/// when a deadline is typed in, see [`TaskDeadline::is_valid_task_deadline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDeadline(NaiveDate);

impl TaskDeadline {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Task deadline should be in the format YYYY-MM-DD";
    pub const MESSAGE_CONSTRAINTS_PAST_DATE: &'static str =
        "Deadlines cannot be in the past. Please choose today's date or a future date.";

    /// Shape check only: `2035-42-99` passes.
    pub fn is_valid_format(test: &str) -> bool {
        date_shape_regex().is_match(test)
    }

    /// True if `test` names a real date and formats back to exactly `test`.
    /// `2024-02-31` is rejected instead of being rolled over into March.
    pub fn is_valid_date(test: &str) -> bool {
        Self::parse_exact(test).is_some()
    }

    /// A real date that is today or later.
    pub fn is_valid_task_deadline(test: &str) -> bool {
        Self::is_valid_task_deadline_on(test, today())
    }

    pub fn is_valid_task_deadline_on(test: &str, today: NaiveDate) -> bool {
        Self::parse_exact(test).is_some_and(|date| date >= today)
    }

    fn parse_exact(test: &str) -> Option<NaiveDate> {
        if !Self::is_valid_format(test) {
            return None;
        }
        let date = NaiveDate::parse_from_str(test, DATE_FORMAT).ok()?;
        (date.format(DATE_FORMAT).to_string() == test).then_some(date)
    }

    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_exact(raw)
            .map(Self)
            .ok_or_else(|| ValidationError::new("task deadline", Self::MESSAGE_CONSTRAINTS))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn is_before(&self, date: NaiveDate) -> bool {
        self.0 < date
    }

    /// Human form, e.g. `5 Mar 2025`.
    pub fn to_description(&self) -> String {
        self.0.format("%-d %b %Y").to_string()
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl fmt::Display for TaskDeadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl TryFrom<String> for TaskDeadline {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TaskDeadline> for String {
    fn from(value: TaskDeadline) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub description: TaskDescription,
    pub deadline: TaskDeadline,
}

impl Task {
    pub fn new(description: TaskDescription, deadline: TaskDeadline) -> Self {
        Self {
            description,
            deadline,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (due {})",
            self.description,
            self.deadline.to_description()
        )
    }
}
