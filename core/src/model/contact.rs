//! Contact-style fields: phone, emergency contact, address and note.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{3,}$").expect("phone pattern compiles"))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid(raw: &str) -> bool {
        phone_regex().is_match(raw)
    }

    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::new("phone", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number of someone to call in an emergency. Empty means none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmergencyContact(String);

impl EmergencyContact {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Emergency contacts should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid(raw: &str) -> bool {
        raw.is_empty() || phone_regex().is_match(raw)
    }

    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::new(
                "emergency contact",
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn is_valid(raw: &str) -> bool {
        raw.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::new("address", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form remark about a student. Empty clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Note(String);

impl Note {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_value {
    ($($ty:ident),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }
        )*
    };
}

string_value!(Phone, EmergencyContact, Address, Note);

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<String> for EmergencyContact {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<String> for Address {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<String> for Note {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}
