#![allow(dead_code)]

use tutorbook_core::error::{ErrorKind, ParseError};
use tutorbook_core::{parse_command, Command, UiState};

pub fn parse(input: &str) -> Result<Command, ParseError> {
    let mut ui = UiState::default();
    parse_command(input, &mut ui)
}

pub fn assert_parse_success(input: &str, expected: Command) {
    match parse(input) {
        Ok(cmd) => pretty_assertions::assert_eq!(cmd, expected, "input: {input:?}"),
        Err(e) => panic!("expected {input:?} to parse, got: {e}"),
    }
}

pub fn assert_parse_failure(input: &str, expected_message: &str) {
    match parse(input) {
        Ok(cmd) => panic!("expected {input:?} to fail, got: {cmd:?}"),
        Err(e) => pretty_assertions::assert_eq!(e.to_string(), expected_message, "input: {input:?}"),
    }
}

pub fn assert_parse_kind(input: &str, expected: ErrorKind) {
    match parse(input) {
        Ok(cmd) => panic!("expected {input:?} to fail, got: {cmd:?}"),
        Err(e) => assert_eq!(e.kind(), expected, "input: {input:?}, error: {e}"),
    }
}

pub fn invalid_format(usage: &str) -> String {
    format!("Invalid command format! \n{usage}")
}

pub fn extra_prefix(usage: &str) -> String {
    format!("Command contains extra prefix(es)! \n{usage}")
}
