use crate::command::ViewCommand;
use crate::error::ParseError;
use crate::parser::syntax::{ALL_PREFIXES, PREFIX_NAME};
use crate::parser::tokenizer::tokenize;
use crate::parser::traits::ArgsParser;
use crate::parser::util::{
    parse_name, reject_extra_prefixes, require_prefixes, required_value,
    verify_no_duplicate_prefixes,
};

pub struct ViewCommandParser;

impl ArgsParser for ViewCommandParser {
    type Output = ViewCommand;

    fn parse(&self, args: &str) -> Result<ViewCommand, ParseError> {
        let usage = ViewCommand::USAGE;
        let map = tokenize(args, &ALL_PREFIXES);
        reject_extra_prefixes(&map, &[PREFIX_NAME], usage)?;
        require_prefixes(&map, &[PREFIX_NAME], usage)?;
        verify_no_duplicate_prefixes(&map, &[PREFIX_NAME])?;
        let name = parse_name(required_value(&map, PREFIX_NAME, usage)?)?;
        Ok(ViewCommand { name })
    }
}
