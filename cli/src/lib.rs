//! tutorbook command-line front end. Exposed as a library for unit tests.

pub mod check;
pub mod commands;
pub mod repl;
pub mod session;
