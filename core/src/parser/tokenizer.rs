//! Splits argument text into a preamble and prefixed values.
//!
//! ```text
//!  n/John Doe s/Math s/English
//!  └─┬────────┘└─┬───┘└─┬──────┘
//!    n/ -> ["John Doe"], s/ -> ["Math", "English"]
//! ```
//!
//! A prefix only counts when it starts the text or follows whitespace, so
//! `na/me` never splits at `a/`. Tokenizing never fails; unknown prefix-like
//! text stays inside the preamble or the preceding value.

use std::collections::HashMap;

use super::syntax::Prefix;

/// Tokenized arguments of one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// First value recorded for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Every value recorded for `prefix`, in order of occurrence.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        !self.all_values(prefix).is_empty()
    }

    fn push(&mut self, prefix: Prefix, value: String) {
        self.values.entry(prefix).or_default().push(value);
    }
}

/// Tokenizes `args` using the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let positions = find_prefix_positions(args, prefixes);

    let mut out = ArgumentMultimap::default();
    let preamble_end = positions.first().map(|(pos, _)| *pos).unwrap_or(args.len());
    out.preamble = args[..preamble_end].trim().to_string();

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let value_start = pos + prefix.as_str().len();
        let value_end = positions
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());
        out.push(*prefix, args[value_start..value_end].trim().to_string());
    }

    tracing::trace!(
        preamble = %out.preamble,
        fields = out.values.len(),
        "tokenized arguments"
    );
    out
}

/// Byte offsets of every recognised prefix, ascending.
fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();
    let mut at_boundary = true;
    let mut skip_until = 0;

    for (idx, ch) in args.char_indices() {
        if idx >= skip_until && at_boundary {
            let rest = &args[idx..];
            let matched = prefixes
                .iter()
                .filter(|p| rest.starts_with(p.as_str()))
                .max_by_key(|p| p.as_str().len());
            if let Some(prefix) = matched {
                positions.push((idx, *prefix));
                skip_until = idx + prefix.as_str().len();
            }
        }
        at_boundary = ch.is_whitespace();
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::*;

    #[test]
    fn empty_input_has_empty_preamble_and_no_values() {
        let map = tokenize("", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "");
        assert!(ALL_PREFIXES.iter().all(|p| !map.is_present(*p)));
        assert_eq!(map.value(PREFIX_NAME), None);
    }

    #[test]
    fn preamble_only() {
        let map = tokenize("  some random text  ", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "some random text");
        assert!(ALL_PREFIXES.iter().all(|p| !map.is_present(*p)));
    }

    #[test]
    fn values_are_trimmed() {
        let map = tokenize(" n/ Bob Choo  \n ti/ 1 ", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_NAME), Some("Bob Choo"));
        assert_eq!(map.value(PREFIX_TASK_INDEX), Some("1"));
        assert!(!map.is_present(PREFIX_SUBJECT));
    }

    #[test]
    fn repeated_prefix_keeps_all_values() {
        let map = tokenize(" n/Amy s/Math s/English s/", &ALL_PREFIXES);
        assert_eq!(
            map.all_values(PREFIX_SUBJECT),
            &["Math".to_string(), "English".to_string(), String::new()]
        );
        assert_eq!(map.value(PREFIX_SUBJECT), Some("Math"));
    }

    #[test]
    fn prefix_inside_word_is_not_split() {
        let map = tokenize(" n/na/me a/Blk 1", &ALL_PREFIXES);
        assert_eq!(map.value(PREFIX_NAME), Some("na/me"));
        assert_eq!(map.value(PREFIX_ADDRESS), Some("Blk 1"));
    }

    #[test]
    fn prefix_at_start_of_text_is_recognised() {
        let map = tokenize("n/Amy", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_NAME), Some("Amy"));
    }

    #[test]
    fn unknown_prefix_stays_in_preamble() {
        let map = tokenize("1 i/somestring", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "1 i/somestring");
    }

    #[test]
    fn prefixes_outside_the_given_set_are_plain_text() {
        let map = tokenize(" n/Amy p/999", &[PREFIX_NAME]);
        assert_eq!(map.value(PREFIX_NAME), Some("Amy p/999"));
        assert!(!map.is_present(PREFIX_PHONE));
    }

    #[test]
    fn similar_prefixes_do_not_shadow_each_other() {
        let map = tokenize(" nt/hello n/Amy lt/Sun 10:00-11:00 t/hw ti/2", &ALL_PREFIXES);
        assert_eq!(map.value(PREFIX_NOTE), Some("hello"));
        assert_eq!(map.value(PREFIX_NAME), Some("Amy"));
        assert_eq!(map.value(PREFIX_LESSON_TIME), Some("Sun 10:00-11:00"));
        assert_eq!(map.value(PREFIX_TASK_DESCRIPTION), Some("hw"));
        assert_eq!(map.value(PREFIX_TASK_INDEX), Some("2"));
    }

    #[test]
    fn rejoining_preserves_every_non_whitespace_character() {
        let input = " hello n/John Doe s/Math s/English nt/likes a/b ";
        let map = tokenize(input, &ALL_PREFIXES);
        let mut rebuilt = map.preamble().to_string();
        let mut seen: HashMap<Prefix, usize> = HashMap::new();
        for (_, prefix) in find_prefix_positions(input, &ALL_PREFIXES) {
            let n = seen.entry(prefix).or_default();
            rebuilt.push_str(prefix.as_str());
            rebuilt.push_str(&map.all_values(prefix)[*n]);
            *n += 1;
        }
        let squash = |s: &str| s.split_whitespace().collect::<String>();
        assert_eq!(squash(&rebuilt), squash(input));
    }
}
