//! Student records and the value objects they are built from.
//!
//! Every value object has an `is_valid` predicate and a validating `new`
//! returning [`ValidationError`](crate::error::ValidationError). Deserializing
//! goes through the same constructors.

mod book;
mod contact;
mod lesson_time;
mod level;
mod name;
mod student;
mod subject;
mod task;

pub use book::StudentBook;
pub use contact::{Address, EmergencyContact, Note, Phone};
pub use lesson_time::LessonTime;
pub use level::{Level, Stream};
pub use name::Name;
pub use student::Student;
pub use subject::{offered_subjects, Subject};
pub use task::{Task, TaskDeadline, TaskDescription};

pub(crate) use task::today;
