use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A student's name. Internal whitespace is collapsed; comparison ignores case,
/// so "bob  CHOO" and "Bob Choo" name the same student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn is_valid(raw: &str) -> bool {
        let collapsed = collapse_whitespace(raw);
        !collapsed.is_empty()
            && collapsed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' ')
    }

    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(raw) {
            return Err(ValidationError::new("name", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(collapse_whitespace(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn key(&self) -> String {
        self.0.to_lowercase()
    }

    /// True if any whole word of this name equals `keyword`, ignoring case.
    pub fn contains_word(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.0
            .split(' ')
            .any(|word| word.to_lowercase() == keyword)
    }
}

pub(crate) fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}
