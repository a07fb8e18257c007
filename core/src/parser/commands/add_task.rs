use crate::command::AddTaskCommand;
use crate::error::ParseError;
use crate::model::Task;
use crate::parser::syntax::{
    ALL_PREFIXES, PREFIX_NAME, PREFIX_TASK_DEADLINE, PREFIX_TASK_DESCRIPTION,
};
use crate::parser::tokenizer::tokenize;
use crate::parser::traits::ArgsParser;
use crate::parser::util::{
    parse_name, parse_task_deadline, parse_task_description, reject_extra_prefixes,
    require_prefixes, required_value, verify_no_duplicate_prefixes,
};

const FIELDS: [crate::parser::syntax::Prefix; 3] =
    [PREFIX_NAME, PREFIX_TASK_DESCRIPTION, PREFIX_TASK_DEADLINE];

pub struct AddTaskCommandParser;

impl ArgsParser for AddTaskCommandParser {
    type Output = AddTaskCommand;

    fn parse(&self, args: &str) -> Result<AddTaskCommand, ParseError> {
        let usage = AddTaskCommand::USAGE;
        let map = tokenize(args, &ALL_PREFIXES);
        reject_extra_prefixes(&map, &FIELDS, usage)?;
        require_prefixes(&map, &FIELDS, usage)?;
        verify_no_duplicate_prefixes(&map, &FIELDS)?;

        let name = parse_name(required_value(&map, PREFIX_NAME, usage)?)?;
        let description =
            parse_task_description(required_value(&map, PREFIX_TASK_DESCRIPTION, usage)?)?;
        let deadline = parse_task_deadline(required_value(&map, PREFIX_TASK_DEADLINE, usage)?)?;
        Ok(AddTaskCommand {
            name,
            task: Task::new(description, deadline),
        })
    }
}
