use std::fmt;

use serde::{Deserialize, Serialize};

use super::level::{Level, Stream};
use crate::error::ValidationError;

const LOWER_SECONDARY: &[&str] = &[
    "ENGLISH",
    "MATH",
    "SCIENCE",
    "HISTORY",
    "GEOGRAPHY",
    "LITERATURE",
    "CHINESE",
    "MALAY",
    "TAMIL",
];

const UPPER_SECONDARY: &[&str] = &[
    "ENGLISH",
    "A_MATH",
    "E_MATH",
    "PHYSICS",
    "CHEMISTRY",
    "BIOLOGY",
    "COMBINED_SCIENCE",
    "HISTORY",
    "GEOGRAPHY",
    "LITERATURE",
    "SOCIAL_STUDIES",
    "POA",
    "CHINESE",
    "MALAY",
    "TAMIL",
];

const UPPER_SECONDARY_NT: &[&str] = &[
    "ENGLISH",
    "MATH",
    "SCIENCE",
    "COMPUTER_APPLICATIONS",
    "CHINESE",
    "MALAY",
    "TAMIL",
];

/// Subjects offered at `level`.
pub fn offered_subjects(level: &Level) -> &'static [&'static str] {
    match (level.is_upper_secondary(), level.stream()) {
        (false, _) => LOWER_SECONDARY,
        (true, Stream::Nt) => UPPER_SECONDARY_NT,
        (true, _) => UPPER_SECONDARY,
    }
}

fn is_offered_anywhere(upper: &str) -> bool {
    LOWER_SECONDARY.contains(&upper)
        || UPPER_SECONDARY.contains(&upper)
        || UPPER_SECONDARY_NT.contains(&upper)
}

/// A subject tag, stored upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject(String);

impl Subject {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Subject should be one of: ENGLISH, MATH, \
         A_MATH, E_MATH, SCIENCE, PHYSICS, CHEMISTRY, BIOLOGY, COMBINED_SCIENCE, HISTORY, \
         GEOGRAPHY, LITERATURE, SOCIAL_STUDIES, POA, COMPUTER_APPLICATIONS, CHINESE, MALAY, TAMIL";

    /// Validity when no level is known.
    pub fn is_valid(raw: &str) -> bool {
        is_offered_anywhere(&raw.trim().to_uppercase())
    }

    pub fn is_valid_for_level(raw: &str, level: &Level) -> bool {
        offered_subjects(level).contains(&raw.trim().to_uppercase().as_str())
    }

    /// Constraint message naming `level` and what it offers.
    pub fn level_message(level: &Level) -> String {
        format!(
            "Subjects offered for {level} are: {}",
            offered_subjects(level).join(", ")
        )
    }

    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(raw) {
            return Err(ValidationError::new("subject", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(raw.trim().to_uppercase()))
    }

    pub fn new_for_level(raw: &str, level: &Level) -> Result<Self, ValidationError> {
        if !Self::is_valid_for_level(raw, level) {
            return Err(ValidationError::new("subject", Self::level_message(level)));
        }
        Ok(Self(raw.trim().to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_offered_at(&self, level: &Level) -> bool {
        offered_subjects(level).contains(&self.0.as_str())
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Subject {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Subject> for String {
    fn from(value: Subject) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_rule_uses_every_offering() {
        assert!(Subject::is_valid("math"));
        assert!(Subject::is_valid("Physics"));
        assert!(Subject::is_valid("computer_applications"));
        assert!(!Subject::is_valid("Chem"));
        assert!(!Subject::is_valid(""));
        assert!(!Subject::is_valid("MATH ENGLISH"));
    }

    #[test]
    fn level_rule_narrows_the_offering() {
        let lower = Level::new("S2 NA").unwrap();
        let upper_nt = Level::new("S4 NT").unwrap();
        let upper = Level::new("S3 EXPRESS").unwrap();
        assert!(Subject::is_valid_for_level("Math", &lower));
        assert!(!Subject::is_valid_for_level("Chemistry", &lower));
        assert!(Subject::is_valid_for_level("Chemistry", &upper));
        assert!(!Subject::is_valid_for_level("Math", &upper));
        assert!(Subject::is_valid_for_level("computer_applications", &upper_nt));
        assert!(!Subject::is_valid_for_level("Physics", &upper_nt));
    }

    #[test]
    fn level_message_embeds_level() {
        let level = Level::new("s2 na").unwrap();
        let err = Subject::new_for_level("Chem", &level).unwrap_err();
        assert!(err.message.contains("S2 NA"));
        assert!(err.message.contains("MATH"));
        assert_eq!(err.message, Subject::level_message(&level));
    }

    #[test]
    fn stored_upper_case() {
        assert_eq!(Subject::new(" english ").unwrap().as_str(), "ENGLISH");
    }
}
