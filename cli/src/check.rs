//! `tutorbook check`: parse lines and report what they would do.

use std::io::Write;

use serde::Serialize;
use tutorbook_core::{parse_command, Command, UiState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CheckReport<'a> {
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CheckError>,
    pub ui_state: UiState,
}

#[derive(Debug, Serialize)]
pub struct CheckError {
    pub kind: &'static str,
    pub code: u16,
    pub message: String,
}

/// Parses every line in order, carrying the UI state across lines.
pub fn check_lines<'a>(lines: &'a [String]) -> Vec<CheckReport<'a>> {
    let mut ui = UiState::default();
    lines
        .iter()
        .map(|line| match parse_command(line, &mut ui) {
            Ok(command) => CheckReport {
                input: line,
                canonical: Some(command.to_input()),
                command: Some(command),
                error: None,
                ui_state: ui,
            },
            Err(e) => CheckReport {
                input: line,
                command: None,
                canonical: None,
                error: Some(CheckError {
                    kind: e.kind().as_str(),
                    code: e.kind().as_u16(),
                    message: e.to_string(),
                }),
                ui_state: ui,
            },
        })
        .collect()
}

/// Writes one JSON object per line. Returns true if every line parsed.
pub fn write_reports(out: &mut impl Write, reports: &[CheckReport<'_>]) -> anyhow::Result<bool> {
    for report in reports {
        writeln!(out, "{}", serde_json::to_string(report)?)?;
    }
    Ok(reports.iter().all(|r| r.error.is_none()))
}
