//! Field prefixes recognised in command arguments.

use std::fmt;

use serde::{Serialize, Serializer};

/// A marker such as `n/` that introduces one field in the argument text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Prefix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_EMERGENCY_CONTACT: Prefix = Prefix::new("ec/");
pub const PREFIX_NOTE: Prefix = Prefix::new("nt/");
pub const PREFIX_SUBJECT: Prefix = Prefix::new("s/");
pub const PREFIX_LEVEL: Prefix = Prefix::new("l/");
pub const PREFIX_TASK_DESCRIPTION: Prefix = Prefix::new("t/");
pub const PREFIX_TASK_DEADLINE: Prefix = Prefix::new("d/");
pub const PREFIX_TASK_INDEX: Prefix = Prefix::new("ti/");
pub const PREFIX_LESSON_TIME: Prefix = Prefix::new("lt/");

/// Every prefix the grammar knows. Parsers tokenize with all of them so that a
/// prefix belonging to another command is reported as extra instead of being
/// swallowed into a neighbouring value.
pub const ALL_PREFIXES: [Prefix; 11] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_ADDRESS,
    PREFIX_EMERGENCY_CONTACT,
    PREFIX_NOTE,
    PREFIX_SUBJECT,
    PREFIX_LEVEL,
    PREFIX_TASK_DESCRIPTION,
    PREFIX_TASK_DEADLINE,
    PREFIX_TASK_INDEX,
    PREFIX_LESSON_TIME,
];

/// Prefixes in `ALL_PREFIXES` that are not in `legal`.
pub fn prefixes_excluding(legal: &[Prefix]) -> Vec<Prefix> {
    ALL_PREFIXES
        .iter()
        .copied()
        .filter(|p| !legal.contains(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn prefixes_are_distinct() {
        let markers: HashSet<&str> = ALL_PREFIXES.iter().map(|p| p.as_str()).collect();
        assert_eq!(markers.len(), ALL_PREFIXES.len());
    }

    #[test]
    fn excluding_keeps_declaration_order() {
        let rest = prefixes_excluding(&[PREFIX_NAME, PREFIX_NOTE]);
        assert_eq!(rest.len(), ALL_PREFIXES.len() - 2);
        assert_eq!(rest[0], PREFIX_PHONE);
        assert!(!rest.contains(&PREFIX_NOTE));
    }
}
