use serde::Serialize;

use crate::model::Student;

/// What `find` searches by. Exactly one key per search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "by", content = "keywords", rename_all = "snake_case")]
pub enum FindPredicate {
    /// Any keyword equal to a whole word of the name, ignoring case.
    NameKeywords(Vec<String>),
    /// Canonical level, e.g. `S2 NA`.
    Level(String),
    /// Any keyword naming one of the student's subjects, ignoring case.
    SubjectKeywords(Vec<String>),
}

impl FindPredicate {
    pub fn matches(&self, student: &Student) -> bool {
        match self {
            Self::NameKeywords(keywords) => keywords.iter().any(|k| student.name.contains_word(k)),
            Self::Level(level) => student
                .level
                .as_ref()
                .is_some_and(|l| &l.to_string() == level),
            Self::SubjectKeywords(keywords) => keywords.iter().any(|k| {
                let wanted = k.to_uppercase();
                student.subjects.iter().any(|s| s.as_str() == wanted)
            }),
        }
    }
}
