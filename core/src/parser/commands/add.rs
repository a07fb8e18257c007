use crate::command::AddCommand;
use crate::error::ParseError;
use crate::model::{EmergencyContact, Student};
use crate::parser::syntax::{
    ALL_PREFIXES, PREFIX_ADDRESS, PREFIX_EMERGENCY_CONTACT, PREFIX_LESSON_TIME, PREFIX_LEVEL,
    PREFIX_NAME, PREFIX_NOTE, PREFIX_PHONE, PREFIX_SUBJECT,
};
use crate::parser::tokenizer::tokenize;
use crate::parser::traits::ArgsParser;
use crate::parser::util::{
    parse_address, parse_emergency_contact, parse_lesson_times, parse_level, parse_name,
    parse_note, parse_phone, parse_subjects, reject_extra_prefixes, require_prefixes,
    required_value, verify_no_duplicate_prefixes,
};

pub struct AddCommandParser;

impl ArgsParser for AddCommandParser {
    type Output = AddCommand;

    fn parse(&self, args: &str) -> Result<AddCommand, ParseError> {
        let usage = AddCommand::USAGE;
        let map = tokenize(args, &ALL_PREFIXES);
        reject_extra_prefixes(
            &map,
            &[
                PREFIX_NAME,
                PREFIX_PHONE,
                PREFIX_ADDRESS,
                PREFIX_EMERGENCY_CONTACT,
                PREFIX_NOTE,
                PREFIX_LEVEL,
                PREFIX_SUBJECT,
                PREFIX_LESSON_TIME,
            ],
            usage,
        )?;
        require_prefixes(&map, &[PREFIX_NAME, PREFIX_PHONE, PREFIX_ADDRESS], usage)?;
        verify_no_duplicate_prefixes(
            &map,
            &[
                PREFIX_NAME,
                PREFIX_PHONE,
                PREFIX_ADDRESS,
                PREFIX_EMERGENCY_CONTACT,
                PREFIX_NOTE,
                PREFIX_LEVEL,
            ],
        )?;

        let name = parse_name(required_value(&map, PREFIX_NAME, usage)?)?;
        let phone = parse_phone(required_value(&map, PREFIX_PHONE, usage)?)?;
        let address = parse_address(required_value(&map, PREFIX_ADDRESS, usage)?)?;
        let emergency_contact = match map.value(PREFIX_EMERGENCY_CONTACT) {
            Some(raw) => parse_emergency_contact(raw)?,
            None => EmergencyContact::default(),
        };
        let note = map.value(PREFIX_NOTE).map(parse_note).unwrap_or_default();
        let level = map.value(PREFIX_LEVEL).map(parse_level).transpose()?;
        let subjects = parse_subjects(map.all_values(PREFIX_SUBJECT), level.as_ref())?;
        let lesson_times = parse_lesson_times(map.all_values(PREFIX_LESSON_TIME))?;

        let mut student = Student::new(name, phone, address);
        student.emergency_contact = emergency_contact;
        student.note = note;
        student.level = level;
        student.subjects = subjects;
        student.set_lesson_times(lesson_times);
        Ok(AddCommand { student })
    }
}
