use crate::command::DeleteCommand;
use crate::error::ParseError;
use crate::parser::syntax::{ALL_PREFIXES, PREFIX_NAME};
use crate::parser::tokenizer::tokenize;
use crate::parser::traits::ArgsParser;
use crate::parser::util::{
    parse_name, reject_extra_prefixes, require_prefixes, required_value,
    verify_no_duplicate_prefixes,
};

pub struct DeleteCommandParser;

impl ArgsParser for DeleteCommandParser {
    type Output = DeleteCommand;

    fn parse(&self, args: &str) -> Result<DeleteCommand, ParseError> {
        let usage = DeleteCommand::USAGE;
        let map = tokenize(args, &ALL_PREFIXES);
        reject_extra_prefixes(&map, &[PREFIX_NAME], usage)?;
        require_prefixes(&map, &[PREFIX_NAME], usage)?;
        verify_no_duplicate_prefixes(&map, &[PREFIX_NAME])?;
        let name = parse_name(required_value(&map, PREFIX_NAME, usage)?)?;
        Ok(DeleteCommand { name })
    }
}
