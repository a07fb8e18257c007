//! Core of tutorbook: a prefix-based command grammar for managing students
//! and their tasks, plus the student book the commands run against.
//!
//! ```text
//! input line ──► parser::parse_command ──► Command ──► Command::execute ──► CommandOutcome
//!                     │                                      │
//!                     └─► UiStateSink                         └─► StudentBook ◄─► storage
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod storage;
pub mod ui;

pub use command::{Command, CommandOutcome};
pub use error::{CliError, CommandError, ErrorKind, ParseError, StorageError, ValidationError};
pub use model::StudentBook;
pub use parser::parse_command;
pub use ui::{UiState, UiStateSink};
