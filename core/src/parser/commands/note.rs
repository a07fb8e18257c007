use crate::command::NoteCommand;
use crate::error::ParseError;
use crate::parser::syntax::{ALL_PREFIXES, PREFIX_NAME, PREFIX_NOTE};
use crate::parser::tokenizer::tokenize;
use crate::parser::traits::ArgsParser;
use crate::parser::util::{
    parse_name, parse_note, reject_extra_prefixes, require_prefixes, required_value,
    verify_no_duplicate_prefixes,
};

pub struct NoteCommandParser;

impl ArgsParser for NoteCommandParser {
    type Output = NoteCommand;

    fn parse(&self, args: &str) -> Result<NoteCommand, ParseError> {
        let usage = NoteCommand::USAGE;
        let map = tokenize(args, &ALL_PREFIXES);
        reject_extra_prefixes(&map, &[PREFIX_NAME, PREFIX_NOTE], usage)?;
        require_prefixes(&map, &[PREFIX_NAME, PREFIX_NOTE], usage)?;
        verify_no_duplicate_prefixes(&map, &[PREFIX_NAME, PREFIX_NOTE])?;
        let name = parse_name(required_value(&map, PREFIX_NAME, usage)?)?;
        let note = parse_note(required_value(&map, PREFIX_NOTE, usage)?);
        Ok(NoteCommand { name, note })
    }
}
