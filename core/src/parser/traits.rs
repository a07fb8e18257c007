use crate::error::ParseError;

/// Parses the argument text that follows a command word.
pub trait ArgsParser {
    type Output;

    fn parse(&self, args: &str) -> Result<Self::Output, ParseError>;
}
