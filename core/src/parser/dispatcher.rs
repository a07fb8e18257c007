//! Routes a raw input line to the parser for its command word.
//!
//! The first whitespace-delimited token selects the command; the rest of the
//! line (leading whitespace included) is handed to that command's parser.
//! Before parsing, the dispatcher tells the UI which panel the command belongs
//! to, so the panel switches even when the arguments turn out to be invalid.

use super::commands::{
    AddCommandParser, AddTaskCommandParser, DeleteCommandParser, DeleteTaskCommandParser,
    FindCommandParser, NoteCommandParser, TagCommandParser, UpdateCommandParser,
    UpdateTaskCommandParser, ViewCommandParser,
};
use super::traits::ArgsParser;
use crate::command::{
    AddCommand, AddTaskCommand, Command, DeleteCommand, DeleteTaskCommand, FindCommand,
    NoteCommand, TagCommand, UpdateCommand, UpdateTaskCommand, ViewCommand, CLEAR_WORD,
    EXIT_WORD, HELP_USAGE, HELP_WORD, LIST_WORD, VIEW_TASKS_WORD,
};
use crate::error::ParseError;
use crate::ui::{UiState, UiStateSink};

struct CommandRoute {
    word: &'static str,
    /// Panel to show; `None` leaves the current one.
    panel: Option<UiState>,
    parse: fn(&str) -> Result<Command, ParseError>,
}

static COMMAND_ROUTES: &[CommandRoute] = &[
    CommandRoute {
        word: AddCommand::COMMAND_WORD,
        panel: Some(UiState::Details),
        parse: |args| AddCommandParser.parse(args).map(Command::Add),
    },
    CommandRoute {
        word: UpdateCommand::COMMAND_WORD,
        panel: Some(UiState::Details),
        parse: |args| UpdateCommandParser.parse(args).map(Command::Update),
    },
    CommandRoute {
        word: DeleteCommand::COMMAND_WORD,
        panel: Some(UiState::Details),
        parse: |args| DeleteCommandParser.parse(args).map(Command::Delete),
    },
    CommandRoute {
        word: CLEAR_WORD,
        panel: Some(UiState::Details),
        parse: |_| Ok(Command::Clear),
    },
    CommandRoute {
        word: FindCommand::COMMAND_WORD,
        panel: Some(UiState::Details),
        parse: |args| FindCommandParser.parse(args).map(Command::Find),
    },
    CommandRoute {
        word: NoteCommand::COMMAND_WORD,
        panel: Some(UiState::Details),
        parse: |args| NoteCommandParser.parse(args).map(Command::Note),
    },
    CommandRoute {
        word: LIST_WORD,
        panel: Some(UiState::Details),
        parse: |_| Ok(Command::List),
    },
    CommandRoute {
        word: EXIT_WORD,
        panel: Some(UiState::Details),
        parse: |_| Ok(Command::Exit),
    },
    CommandRoute {
        word: HELP_WORD,
        panel: Some(UiState::Details),
        parse: |_| Ok(Command::Help),
    },
    CommandRoute {
        word: TagCommand::COMMAND_WORD,
        panel: Some(UiState::Details),
        parse: |args| TagCommandParser.parse(args).map(Command::Tag),
    },
    CommandRoute {
        word: AddTaskCommand::COMMAND_WORD,
        panel: None,
        parse: |args| AddTaskCommandParser.parse(args).map(Command::AddTask),
    },
    CommandRoute {
        word: UpdateTaskCommand::COMMAND_WORD,
        panel: None,
        parse: |args| UpdateTaskCommandParser.parse(args).map(Command::UpdateTask),
    },
    CommandRoute {
        word: DeleteTaskCommand::COMMAND_WORD,
        panel: None,
        parse: |args| DeleteTaskCommandParser.parse(args).map(Command::DeleteTask),
    },
    CommandRoute {
        word: ViewCommand::COMMAND_WORD,
        panel: Some(UiState::Details),
        parse: |args| ViewCommandParser.parse(args).map(Command::View),
    },
    CommandRoute {
        word: VIEW_TASKS_WORD,
        panel: Some(UiState::Tasks),
        parse: |_| Ok(Command::ViewTasks),
    },
];

/// Every recognised command word, in help order.
pub fn command_words() -> impl Iterator<Item = &'static str> {
    COMMAND_ROUTES.iter().map(|route| route.word)
}

/// Parses one line of user input.
///
/// Command words are case-sensitive. Blank input is an invalid format
/// carrying the `help` usage; an unrecognised word is
/// [`ParseError::UnknownCommand`] and leaves the UI untouched.
pub fn parse_command(input: &str, ui: &mut dyn UiStateSink) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat { usage: HELP_USAGE });
    }
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };

    let Some(route) = COMMAND_ROUTES.iter().find(|route| route.word == word) else {
        tracing::debug!(word, "unknown command word");
        return Err(ParseError::UnknownCommand);
    };
    if let Some(panel) = route.panel {
        ui.set_state(panel);
    }
    tracing::debug!(word, args, "dispatching command");
    (route.parse)(args)
}
