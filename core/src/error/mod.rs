pub mod command;
#[allow(clippy::module_inception)]
pub mod error;
pub mod parse;

pub use command::CommandError;
pub use error::{CliError, StorageError};
pub use parse::{ErrorKind, ParseError, ValidationError};
