use thiserror::Error;

use crate::parser::syntax::Prefix;

/// Category of a parse failure. Callers branch on this rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorKind {
    UnknownCommand = 1,
    InvalidFormat = 2,
    ExtraPrefix = 3,
    DuplicatePrefix = 4,
    ConstraintViolation = 5,
    IndexFormat = 6,
    NothingToUpdate = 7,
}

impl ErrorKind {
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnknownCommand => "unknown_command",
            Self::InvalidFormat => "invalid_format",
            Self::ExtraPrefix => "extra_prefix",
            Self::DuplicatePrefix => "duplicate_prefix",
            Self::ConstraintViolation => "constraint_violation",
            Self::IndexFormat => "index_format",
            Self::NothingToUpdate => "nothing_to_update",
        }
    }
}

/// A value failed the format rule of its type.
///
/// `field` names the value type ("name", "subject", ...); `message` is the
/// user-facing constraint text and is what gets displayed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every way a command line can be rejected. The first violated rule wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,

    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("Command contains extra prefix(es)! \n{usage}")]
    ExtraPrefix { usage: &'static str },

    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        join_prefixes(.prefixes)
    )]
    DuplicatePrefix { prefixes: Vec<Prefix> },

    #[error(transparent)]
    Constraint(#[from] ValidationError),

    #[error("Task index is not a non-zero unsigned integer.")]
    IndexFormat,

    #[error("At least one field to update must be provided.")]
    NothingToUpdate,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCommand => ErrorKind::UnknownCommand,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::ExtraPrefix { .. } => ErrorKind::ExtraPrefix,
            Self::DuplicatePrefix { .. } => ErrorKind::DuplicatePrefix,
            Self::Constraint(_) => ErrorKind::ConstraintViolation,
            Self::IndexFormat => ErrorKind::IndexFormat,
            Self::NothingToUpdate => ErrorKind::NothingToUpdate,
        }
    }

    pub fn constraint(field: &'static str, message: impl Into<String>) -> Self {
        Self::Constraint(ValidationError::new(field, message))
    }
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_NAME, PREFIX_TASK_INDEX};

    #[test]
    fn duplicate_prefix_message_lists_every_prefix() {
        let err = ParseError::DuplicatePrefix {
            prefixes: vec![PREFIX_NAME, PREFIX_TASK_INDEX],
        };
        assert_eq!(
            err.to_string(),
            "Multiple values specified for the following single-valued field(s): n/ ti/"
        );
        assert_eq!(err.kind(), ErrorKind::DuplicatePrefix);
    }

    #[test]
    fn constraint_displays_validator_message_unchanged() {
        let err = ParseError::constraint("name", "Names should not be blank");
        assert_eq!(err.to_string(), "Names should not be blank");
        assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
    }

    #[test]
    fn format_errors_embed_usage() {
        let err = ParseError::InvalidFormat { usage: "view: usage" };
        assert_eq!(err.to_string(), "Invalid command format! \nview: usage");
        let err = ParseError::ExtraPrefix { usage: "view: usage" };
        assert_eq!(err.to_string(), "Command contains extra prefix(es)! \nview: usage");
    }
}
