//! A loaded student book plus the panel state, shared by `repl` and `exec`.

use std::io::Write;
use std::path::{Path, PathBuf};

use tutorbook_core::command::all_usages;
use tutorbook_core::error::CliError;
use tutorbook_core::storage::{load_book, save_book};
use tutorbook_core::{parse_command, CommandOutcome, StudentBook, UiState};

pub struct Session {
    book: StudentBook,
    data_file: PathBuf,
    ui: UiState,
}

impl Session {
    pub fn open(data_file: impl Into<PathBuf>) -> Result<Self, CliError> {
        let data_file = data_file.into();
        let book = load_book(&data_file)?;
        Ok(Self {
            book,
            data_file,
            ui: UiState::default(),
        })
    }

    pub fn book(&self) -> &StudentBook {
        &self.book
    }

    pub fn ui(&self) -> UiState {
        self.ui
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Parses and runs one line. The book is saved after every successful
    /// command that changes it.
    pub fn handle_line(&mut self, line: &str) -> Result<CommandOutcome, CliError> {
        let command = parse_command(line, &mut self.ui)?;
        let outcome = command.execute(&mut self.book)?;
        if command.is_mutating() {
            save_book(&self.data_file, &self.book)?;
        }
        Ok(outcome)
    }
}

/// Writes the feedback of `outcome`, followed by any listed students and the
/// usage text when help was requested.
pub fn render_outcome(out: &mut impl Write, outcome: &CommandOutcome) -> std::io::Result<()> {
    writeln!(out, "{}", outcome.feedback)?;
    for (i, student) in outcome.students.iter().enumerate() {
        let level = student
            .level
            .map(|l| format!(" [{l}]"))
            .unwrap_or_default();
        writeln!(out, "{:>3}. {}{} {}", i + 1, student.name, level, student.phone)?;
    }
    if outcome.show_help {
        for usage in all_usages() {
            writeln!(out)?;
            writeln!(out, "{usage}")?;
        }
    }
    Ok(())
}
