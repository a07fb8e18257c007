//! Shared checks and field extractors used by the per-command parsers.
//!
//! Each parser applies them in the same order: extra prefixes, required
//! prefixes and preamble, duplicate single-valued prefixes, then field
//! validation. The first failure is returned.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::syntax::{prefixes_excluding, Prefix};
use super::tokenizer::ArgumentMultimap;
use crate::command::TaskIndex;
use crate::error::{ParseError, ValidationError};
use crate::model::{
    today, Address, EmergencyContact, LessonTime, Level, Name, Note, Phone, Subject,
    TaskDeadline, TaskDescription,
};

pub fn are_prefixes_present(map: &ArgumentMultimap, prefixes: &[Prefix]) -> bool {
    prefixes.iter().all(|p| map.is_present(*p))
}

pub fn is_any_prefix_present(map: &ArgumentMultimap, prefixes: &[Prefix]) -> bool {
    prefixes.iter().any(|p| map.is_present(*p))
}

pub fn reject_extra_prefixes(
    map: &ArgumentMultimap,
    legal: &[Prefix],
    usage: &'static str,
) -> Result<(), ParseError> {
    if is_any_prefix_present(map, &prefixes_excluding(legal)) {
        return Err(ParseError::ExtraPrefix { usage });
    }
    Ok(())
}

/// Fails with the usage text unless every `required` prefix is present and
/// nothing precedes the first prefix.
pub fn require_prefixes(
    map: &ArgumentMultimap,
    required: &[Prefix],
    usage: &'static str,
) -> Result<(), ParseError> {
    if !are_prefixes_present(map, required) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage });
    }
    Ok(())
}

/// Fails if any of `single_valued` occurs more than once. All offenders are
/// reported, in the order given.
pub fn verify_no_duplicate_prefixes(
    map: &ArgumentMultimap,
    single_valued: &[Prefix],
) -> Result<(), ParseError> {
    let prefixes: Vec<Prefix> = single_valued
        .iter()
        .copied()
        .filter(|p| map.all_values(*p).len() > 1)
        .collect();
    if prefixes.is_empty() {
        Ok(())
    } else {
        Err(ParseError::DuplicatePrefix { prefixes })
    }
}

/// The value of a prefix already known to be present.
pub fn required_value<'a>(
    map: &'a ArgumentMultimap,
    prefix: Prefix,
    usage: &'static str,
) -> Result<&'a str, ParseError> {
    map.value(prefix)
        .ok_or(ParseError::InvalidFormat { usage })
}

pub fn parse_name(raw: &str) -> Result<Name, ParseError> {
    Ok(Name::new(raw.trim())?)
}

pub fn parse_phone(raw: &str) -> Result<Phone, ParseError> {
    Ok(Phone::new(raw.trim())?)
}

pub fn parse_address(raw: &str) -> Result<Address, ParseError> {
    Ok(Address::new(raw.trim())?)
}

pub fn parse_emergency_contact(raw: &str) -> Result<EmergencyContact, ParseError> {
    Ok(EmergencyContact::new(raw.trim())?)
}

pub fn parse_note(raw: &str) -> Note {
    Note::new(raw)
}

pub fn parse_level(raw: &str) -> Result<Level, ParseError> {
    Ok(Level::new(raw.trim())?)
}

/// Validates subjects against `level` when the same command supplies one.
///
/// Any failure under a level is reported with that level's offering, so the
/// user sees which subjects would have been accepted.
pub fn parse_subjects(
    values: &[String],
    level: Option<&Level>,
) -> Result<BTreeSet<Subject>, ParseError> {
    let checked: Result<BTreeSet<Subject>, ValidationError> = values
        .iter()
        .map(|raw| match level {
            Some(level) => Subject::new_for_level(raw.trim(), level),
            None => Subject::new(raw.trim()),
        })
        .collect();
    match (checked, level) {
        (Ok(subjects), _) => Ok(subjects),
        (Err(_), Some(level)) => Err(ParseError::constraint(
            "subject",
            Subject::level_message(level),
        )),
        (Err(e), None) => Err(e.into()),
    }
}

/// Empty values are skipped, so a lone `lt/` yields an empty list.
pub fn parse_lesson_times(values: &[String]) -> Result<Vec<LessonTime>, ParseError> {
    values
        .iter()
        .map(|raw| raw.trim())
        .filter(|raw| !raw.is_empty())
        .map(|raw| LessonTime::new(raw).map_err(ParseError::from))
        .collect()
}

pub fn parse_task_description(raw: &str) -> Result<TaskDescription, ParseError> {
    Ok(TaskDescription::new(raw)?)
}

pub fn parse_task_deadline(raw: &str) -> Result<TaskDeadline, ParseError> {
    parse_task_deadline_on(raw, today())
}

/// Format is checked before the date is compared with `today`; today itself
/// is accepted.
pub fn parse_task_deadline_on(raw: &str, today: NaiveDate) -> Result<TaskDeadline, ParseError> {
    let raw = raw.trim();
    let deadline = TaskDeadline::new(raw)?;
    if deadline.is_before(today) {
        return Err(ParseError::constraint(
            "task deadline",
            TaskDeadline::MESSAGE_CONSTRAINTS_PAST_DATE,
        ));
    }
    Ok(deadline)
}

/// Accepts only plain ASCII digits denoting a value of at least 1.
pub fn parse_task_index(raw: &str) -> Result<TaskIndex, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::IndexFormat);
    }
    raw.parse::<usize>()
        .ok()
        .and_then(TaskIndex::from_one_based)
        .ok_or(ParseError::IndexFormat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::parser::syntax::{ALL_PREFIXES, PREFIX_NAME, PREFIX_SUBJECT, PREFIX_TASK_INDEX};
    use crate::parser::tokenizer::tokenize;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn task_index_accepts_positive_integers_only() {
        assert_eq!(parse_task_index(" 2 ").unwrap().one_based(), 2);
        for bad in ["", "0", "-1", "+1", "1.5", "a", "1 2", "99999999999999999999999"] {
            assert_eq!(parse_task_index(bad), Err(ParseError::IndexFormat), "{bad:?}");
        }
    }

    #[test]
    fn deadline_checks_format_before_past_date() {
        let today = date(2025, 3, 1);
        let err = parse_task_deadline_on("2025-02-30", today).unwrap_err();
        assert_eq!(err.to_string(), TaskDeadline::MESSAGE_CONSTRAINTS);
        let err = parse_task_deadline_on("2025-02-28", today).unwrap_err();
        assert_eq!(err.to_string(), TaskDeadline::MESSAGE_CONSTRAINTS_PAST_DATE);
        assert!(parse_task_deadline_on("2025-03-01", today).is_ok());
        assert!(parse_task_deadline_on(" 2025-03-02 ", today).is_ok());
    }

    #[test]
    fn subjects_under_a_level_use_level_message() {
        let level = Level::new("S2 NA").unwrap();
        let err = parse_subjects(&["CHEMISTRY".into()], Some(&level)).unwrap_err();
        assert_eq!(err.to_string(), Subject::level_message(&level));

        let err = parse_subjects(&["CHEMISTRY".into(), "ART".into()], None).unwrap_err();
        assert_eq!(err.to_string(), Subject::MESSAGE_CONSTRAINTS);

        let ok = parse_subjects(&["math".into(), "MATH".into()], Some(&level)).unwrap();
        assert_eq!(ok.len(), 1);
    }

    #[test]
    fn empty_lesson_time_values_are_skipped() {
        assert!(parse_lesson_times(&["".into()]).unwrap().is_empty());
        let slots = parse_lesson_times(&["Sun 11:00-13:00".into(), " ".into()]).unwrap();
        assert_eq!(slots.len(), 1);
        assert!(parse_lesson_times(&["Sun 13:00-11:00".into()]).is_err());
    }

    #[test]
    fn duplicates_reported_in_given_order() {
        let map = tokenize(" ti/1 n/a ti/2 n/b s/x s/y", &ALL_PREFIXES);
        let err = verify_no_duplicate_prefixes(&map, &[PREFIX_NAME, PREFIX_TASK_INDEX]).unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicatePrefix {
                prefixes: vec![PREFIX_NAME, PREFIX_TASK_INDEX]
            }
        );
        assert!(verify_no_duplicate_prefixes(&map, &[PREFIX_SUBJECT]).is_err());
    }

    #[test]
    fn preamble_fails_required_check() {
        let map = tokenize(" junk n/Bob", &ALL_PREFIXES);
        let err = require_prefixes(&map, &[PREFIX_NAME], "usage").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        let map = tokenize(" n/Bob", &ALL_PREFIXES);
        assert!(require_prefixes(&map, &[PREFIX_NAME], "usage").is_ok());
        assert_eq!(required_value(&map, PREFIX_NAME, "usage").unwrap(), "Bob");
    }
}
