use crate::command::DeleteTaskCommand;
use crate::error::ParseError;
use crate::parser::syntax::{ALL_PREFIXES, PREFIX_NAME, PREFIX_TASK_INDEX};
use crate::parser::tokenizer::tokenize;
use crate::parser::traits::ArgsParser;
use crate::parser::util::{
    parse_name, parse_task_index, reject_extra_prefixes, require_prefixes, required_value,
    verify_no_duplicate_prefixes,
};

pub struct DeleteTaskCommandParser;

impl ArgsParser for DeleteTaskCommandParser {
    type Output = DeleteTaskCommand;

    fn parse(&self, args: &str) -> Result<DeleteTaskCommand, ParseError> {
        let usage = DeleteTaskCommand::USAGE;
        let map = tokenize(args, &ALL_PREFIXES);
        reject_extra_prefixes(&map, &[PREFIX_NAME, PREFIX_TASK_INDEX], usage)?;
        require_prefixes(&map, &[PREFIX_NAME, PREFIX_TASK_INDEX], usage)?;
        verify_no_duplicate_prefixes(&map, &[PREFIX_NAME, PREFIX_TASK_INDEX])?;

        let name = parse_name(required_value(&map, PREFIX_NAME, usage)?)?;
        let index = parse_task_index(required_value(&map, PREFIX_TASK_INDEX, usage)?)?;
        Ok(DeleteTaskCommand { name, index })
    }
}
