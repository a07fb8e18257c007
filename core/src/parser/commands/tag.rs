use crate::command::{TagCommand, UpdateStudentDescriptor};
use crate::error::ParseError;
use crate::parser::syntax::{ALL_PREFIXES, PREFIX_LEVEL, PREFIX_NAME, PREFIX_SUBJECT};
use crate::parser::tokenizer::tokenize;
use crate::parser::traits::ArgsParser;
use crate::parser::util::{
    is_any_prefix_present, parse_level, parse_name, parse_subjects, reject_extra_prefixes,
    require_prefixes, required_value, verify_no_duplicate_prefixes,
};

pub struct TagCommandParser;

impl ArgsParser for TagCommandParser {
    type Output = TagCommand;

    fn parse(&self, args: &str) -> Result<TagCommand, ParseError> {
        let usage = TagCommand::USAGE;
        let map = tokenize(args, &ALL_PREFIXES);
        reject_extra_prefixes(&map, &[PREFIX_NAME, PREFIX_LEVEL, PREFIX_SUBJECT], usage)?;
        require_prefixes(&map, &[PREFIX_NAME], usage)?;
        if !is_any_prefix_present(&map, &[PREFIX_LEVEL, PREFIX_SUBJECT]) {
            return Err(ParseError::InvalidFormat { usage });
        }
        verify_no_duplicate_prefixes(&map, &[PREFIX_NAME, PREFIX_LEVEL])?;

        let name = parse_name(required_value(&map, PREFIX_NAME, usage)?)?;
        let level = map.value(PREFIX_LEVEL).map(parse_level).transpose()?;
        let subjects = if map.is_present(PREFIX_SUBJECT) {
            Some(parse_subjects(map.all_values(PREFIX_SUBJECT), level.as_ref())?)
        } else {
            None
        };
        Ok(TagCommand {
            name,
            descriptor: UpdateStudentDescriptor {
                level,
                subjects,
                ..Default::default()
            },
        })
    }
}
