use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use chrono::{NaiveTime, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn lesson_time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(MON|TUE|WED|THU|FRI|SAT|SUN)\s+([0-9]{2}:[0-9]{2})-([0-9]{2}:[0-9]{2})$")
            .expect("lesson time pattern compiles")
    })
}

/// A weekly lesson slot such as `Sun 11:00-13:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LessonTime {
    day: Weekday,
    start: NaiveTime,
    end: NaiveTime,
}

impl LessonTime {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Lesson time should be in the format \
         DAY HH:MM-HH:MM, e.g. Sun 11:00-13:00, and the start time must be before the end time";

    pub fn is_valid(raw: &str) -> bool {
        Self::parse_parts(raw).is_some()
    }

    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let (day, start, end) = Self::parse_parts(raw)
            .ok_or_else(|| ValidationError::new("lesson time", Self::MESSAGE_CONSTRAINTS))?;
        Ok(Self { day, start, end })
    }

    fn parse_parts(raw: &str) -> Option<(Weekday, NaiveTime, NaiveTime)> {
        let caps = lesson_time_regex().captures(raw.trim())?;
        let day: Weekday = caps[1].parse().ok()?;
        let start = NaiveTime::parse_from_str(&caps[2], "%H:%M").ok()?;
        let end = NaiveTime::parse_from_str(&caps[3], "%H:%M").ok()?;
        (start < end).then_some((day, start, end))
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    fn sort_key(&self) -> (u32, NaiveTime, NaiveTime) {
        (self.day.num_days_from_monday(), self.start, self.end)
    }
}

impl PartialOrd for LessonTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LessonTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for LessonTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

impl TryFrom<String> for LessonTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<LessonTime> for String {
    fn from(value: LessonTime) -> Self {
        value.to_string()
    }
}
