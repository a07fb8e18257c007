//! Command-line grammar: prefixes, tokenizing, per-command parsers and the
//! dispatcher that ties them together.

pub mod commands;
pub mod dispatcher;
pub mod syntax;
pub mod tokenizer;
pub mod traits;
pub mod util;

pub use dispatcher::{command_words, parse_command};
pub use traits::ArgsParser;
