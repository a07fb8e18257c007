use thiserror::Error;

/// Failures raised while applying a parsed command to the student book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("No student named {0} was found")]
    StudentNotFound(String),

    #[error("A student named {0} already exists")]
    DuplicateStudent(String),

    #[error("This task already exists for {0}")]
    DuplicateTask(String),

    #[error("The task index provided is invalid: {index} ({name} has {count} task(s))")]
    TaskIndexOutOfRange {
        name: String,
        index: usize,
        count: usize,
    },

    #[error("{0}")]
    SubjectNotOffered(String),
}
