use crate::command::{UpdateCommand, UpdateStudentDescriptor};
use crate::error::ParseError;
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

pub struct UpdateCommandParser;

impl ArgsParser for UpdateCommandParser {
    type Output = UpdateCommand;

    fn parse(&self, args: &str) -> Result<UpdateCommand, ParseError> {
        let usage = UpdateCommand::USAGE;
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
        require_prefixes(&map, &[PREFIX_NAME], usage)?;
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
        let mut descriptor = UpdateStudentDescriptor {
            phone: map.value(PREFIX_PHONE).map(parse_phone).transpose()?,
            address: map.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
            emergency_contact: map
                .value(PREFIX_EMERGENCY_CONTACT)
                .map(parse_emergency_contact)
                .transpose()?,
            note: map.value(PREFIX_NOTE).map(parse_note),
            level: map.value(PREFIX_LEVEL).map(parse_level).transpose()?,
            ..Default::default()
        };
        if map.is_present(PREFIX_SUBJECT) {
            descriptor.subjects = Some(parse_subjects(
                map.all_values(PREFIX_SUBJECT),
                descriptor.level.as_ref(),
            )?);
        }
        if map.is_present(PREFIX_LESSON_TIME) {
            descriptor.lesson_times = Some(parse_lesson_times(map.all_values(PREFIX_LESSON_TIME))?);
        }

        if !descriptor.is_any_field_updated() {
            return Err(ParseError::NothingToUpdate);
        }
        Ok(UpdateCommand { name, descriptor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_alone_updates_nothing() {
        assert_eq!(
            UpdateCommandParser.parse(" n/Amy"),
            Err(ParseError::NothingToUpdate)
        );
    }

    #[test]
    fn empty_lesson_time_clears() {
        let cmd = UpdateCommandParser.parse(" n/Amy lt/").unwrap();
        assert_eq!(cmd.descriptor.lesson_times, Some(Vec::new()));
    }

    #[test]
    fn empty_note_and_contact_are_updates() {
        let cmd = UpdateCommandParser.parse(" n/Amy nt/ ec/").unwrap();
        assert!(cmd.descriptor.note.unwrap().is_empty());
        assert!(cmd.descriptor.emergency_contact.unwrap().is_empty());
    }

    #[test]
    fn invalid_name_wins_over_invalid_phone() {
        let err = UpdateCommandParser.parse(" n/Amy* p/abc").unwrap_err();
        assert_eq!(err.to_string(), crate::model::Name::MESSAGE_CONSTRAINTS);
    }
}
