use crate::command::{UpdateTaskCommand, UpdateTaskDescriptor};
use crate::error::ParseError;
use crate::parser::syntax::{
    ALL_PREFIXES, PREFIX_NAME, PREFIX_TASK_DEADLINE, PREFIX_TASK_DESCRIPTION, PREFIX_TASK_INDEX,
};
use crate::parser::tokenizer::tokenize;
use crate::parser::traits::ArgsParser;
use crate::parser::util::{
    parse_name, parse_task_deadline, parse_task_description, parse_task_index,
    reject_extra_prefixes, require_prefixes, required_value, verify_no_duplicate_prefixes,
};

const FIELDS: [crate::parser::syntax::Prefix; 4] = [
    PREFIX_NAME,
    PREFIX_TASK_INDEX,
    PREFIX_TASK_DESCRIPTION,
    PREFIX_TASK_DEADLINE,
];

pub struct UpdateTaskCommandParser;

impl ArgsParser for UpdateTaskCommandParser {
    type Output = UpdateTaskCommand;

    fn parse(&self, args: &str) -> Result<UpdateTaskCommand, ParseError> {
        let usage = UpdateTaskCommand::USAGE;
        let map = tokenize(args, &ALL_PREFIXES);
        reject_extra_prefixes(&map, &FIELDS, usage)?;
        require_prefixes(&map, &[PREFIX_NAME, PREFIX_TASK_INDEX], usage)?;
        verify_no_duplicate_prefixes(&map, &FIELDS)?;

        let name = parse_name(required_value(&map, PREFIX_NAME, usage)?)?;
        let index = parse_task_index(required_value(&map, PREFIX_TASK_INDEX, usage)?)?;
        let descriptor = UpdateTaskDescriptor {
            description: map
                .value(PREFIX_TASK_DESCRIPTION)
                .map(parse_task_description)
                .transpose()?,
            deadline: map
                .value(PREFIX_TASK_DEADLINE)
                .map(parse_task_deadline)
                .transpose()?,
        };
        if !descriptor.is_any_field_updated() {
            return Err(ParseError::NothingToUpdate);
        }
        Ok(UpdateTaskCommand {
            name,
            index,
            descriptor,
        })
    }
}
