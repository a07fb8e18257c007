use crate::command::{FindCommand, FindPredicate};
use crate::error::ParseError;
use crate::model::{Level, Name, Subject};
use crate::parser::syntax::{ALL_PREFIXES, PREFIX_LEVEL, PREFIX_NAME, PREFIX_SUBJECT};
use crate::parser::tokenizer::tokenize;
use crate::parser::traits::ArgsParser;
use crate::parser::util::{reject_extra_prefixes, verify_no_duplicate_prefixes};

const SEARCH_KEYS: [crate::parser::syntax::Prefix; 3] = [PREFIX_NAME, PREFIX_LEVEL, PREFIX_SUBJECT];

/// Searches by exactly one of `n/`, `l/` or `s/`.
pub struct FindCommandParser;

impl ArgsParser for FindCommandParser {
    type Output = FindCommand;

    fn parse(&self, args: &str) -> Result<FindCommand, ParseError> {
        let usage = FindCommand::USAGE;
        let map = tokenize(args, &ALL_PREFIXES);
        reject_extra_prefixes(&map, &SEARCH_KEYS, usage)?;

        let present: Vec<_> = SEARCH_KEYS.iter().filter(|p| map.is_present(**p)).collect();
        if present.len() != 1 || !map.preamble().is_empty() {
            return Err(ParseError::InvalidFormat { usage });
        }
        verify_no_duplicate_prefixes(&map, &SEARCH_KEYS)?;

        let key = *present[0];
        let raw = map.value(key).unwrap_or_default();
        let mut keywords: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        if keywords.is_empty() {
            // A blank value is one empty keyword, left to the field's own rule.
            keywords.push(String::new());
        }

        let predicate = if key == PREFIX_NAME {
            if keywords.iter().any(|k| !Name::is_valid(k)) {
                return Err(ParseError::constraint("name", Name::MESSAGE_CONSTRAINTS));
            }
            FindPredicate::NameKeywords(keywords)
        } else if key == PREFIX_LEVEL {
            let level = Level::normalize(raw)
                .ok_or_else(|| ParseError::constraint("level", Level::MESSAGE_CONSTRAINTS))?;
            FindPredicate::Level(level)
        } else {
            if keywords.iter().any(|k| !Subject::is_valid(k)) {
                return Err(ParseError::constraint("subject", Subject::MESSAGE_CONSTRAINTS));
            }
            FindPredicate::SubjectKeywords(keywords)
        };
        Ok(FindCommand { predicate })
    }
}
