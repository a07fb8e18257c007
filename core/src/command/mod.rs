//! Parsed commands, ready to run against a [`StudentBook`](crate::model::StudentBook).

mod descriptor;
mod execute;
mod index;
mod predicate;

use serde::Serialize;

use crate::model::{Name, Note, Student, Task};
use crate::parser::syntax::{
    PREFIX_ADDRESS, PREFIX_EMERGENCY_CONTACT, PREFIX_LESSON_TIME, PREFIX_LEVEL, PREFIX_NAME,
    PREFIX_NOTE, PREFIX_PHONE, PREFIX_SUBJECT, PREFIX_TASK_DEADLINE, PREFIX_TASK_DESCRIPTION,
    PREFIX_TASK_INDEX,
};

pub use descriptor::{UpdateStudentDescriptor, UpdateTaskDescriptor};
pub use execute::CommandOutcome;
pub use index::TaskIndex;
pub use predicate::FindPredicate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddCommand {
    pub student: Student,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const USAGE: &'static str = "add: Adds a student to the book. \
Parameters: n/NAME p/PHONE a/ADDRESS [ec/EMERGENCY_CONTACT] [nt/NOTE] [l/LEVEL] [s/SUBJECT]... [lt/LESSON_TIME]...\n\
Example: add n/John Doe p/98765432 a/311, Clementi Ave 2, #02-25 l/S3 EXPRESS s/PHYSICS lt/Sun 11:00-13:00";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCommand {
    pub name: Name,
    pub descriptor: UpdateStudentDescriptor,
}

impl UpdateCommand {
    pub const COMMAND_WORD: &'static str = "update";
    pub const USAGE: &'static str = "update: Updates the details of the named student. \
Fields given overwrite the stored values; an empty lt/ clears all lesson times.\n\
Parameters: n/NAME [p/PHONE] [a/ADDRESS] [ec/EMERGENCY_CONTACT] [nt/NOTE] [l/LEVEL] [s/SUBJECT]... [lt/LESSON_TIME]...\n\
Example: update n/John Doe p/91234567 lt/Mon 09:00-10:00";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteCommand {
    pub name: Name,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const USAGE: &'static str = "delete: Deletes the named student.\n\
Parameters: n/NAME\n\
Example: delete n/John Doe";
}

pub const CLEAR_WORD: &str = "clear";
pub const CLEAR_USAGE: &str = "clear: Deletes every student.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindCommand {
    pub predicate: FindPredicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const USAGE: &'static str = "find: Finds students by exactly one of name keywords, \
level, or subject keywords (case-insensitive).\n\
Parameters: n/KEYWORD [MORE_KEYWORDS]... | l/LEVEL | s/SUBJECT [MORE_SUBJECTS]...\n\
Example: find n/alice bob";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCommand {
    pub name: Name,
    /// Empty removes the note.
    pub note: Note,
}

impl NoteCommand {
    pub const COMMAND_WORD: &'static str = "note";
    pub const USAGE: &'static str = "note: Sets the note of the named student. An empty note removes it.\n\
Parameters: n/NAME nt/NOTE\n\
Example: note n/John Doe nt/Needs extra help with algebra";
}

pub const LIST_WORD: &str = "list";
pub const LIST_USAGE: &str = "list: Lists every student.";

pub const EXIT_WORD: &str = "exit";
pub const EXIT_USAGE: &str = "exit: Exits the program.";

pub const HELP_WORD: &str = "help";
pub const HELP_USAGE: &str = "help: Shows program usage instructions.\n\
Example: help";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCommand {
    pub name: Name,
    /// Only `level` and `subjects` are ever set.
    pub descriptor: UpdateStudentDescriptor,
}

impl TagCommand {
    pub const COMMAND_WORD: &'static str = "tag";
    pub const USAGE: &'static str = "tag: Tags the named student with a level and/or subjects. \
Subjects given replace the stored ones.\n\
Parameters: n/NAME [l/LEVEL] [s/SUBJECT]...\n\
Example: tag n/John Doe l/S2 NA s/MATH s/SCIENCE";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddTaskCommand {
    pub name: Name,
    pub task: Task,
}

impl AddTaskCommand {
    pub const COMMAND_WORD: &'static str = "addtask";
    pub const USAGE: &'static str = "addtask: Adds a task to the named student.\n\
Parameters: n/NAME t/TASK_DESCRIPTION d/TASK_DEADLINE (YYYY-MM-DD)\n\
Example: addtask n/John Doe t/Marking Assignment 1 d/2025-12-25";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTaskCommand {
    pub name: Name,
    pub index: TaskIndex,
    pub descriptor: UpdateTaskDescriptor,
}

impl UpdateTaskCommand {
    pub const COMMAND_WORD: &'static str = "updatetask";
    pub const USAGE: &'static str = "updatetask: Updates a task of the named student, \
identified by its index in the student's task list.\n\
Parameters: n/NAME ti/TASK_INDEX [t/TASK_DESCRIPTION] [d/TASK_DEADLINE]\n\
Example: updatetask n/John Doe ti/1 d/2025-12-31";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteTaskCommand {
    pub name: Name,
    pub index: TaskIndex,
}

impl DeleteTaskCommand {
    pub const COMMAND_WORD: &'static str = "deletetask";
    pub const USAGE: &'static str = "deletetask: Deletes a task of the named student, \
identified by its index in the student's task list.\n\
Parameters: n/NAME ti/TASK_INDEX\n\
Example: deletetask n/John Doe ti/1";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewCommand {
    pub name: Name,
}

impl ViewCommand {
    pub const COMMAND_WORD: &'static str = "view";
    pub const USAGE: &'static str = "view: Shows the full details of the named student.\n\
Parameters: n/NAME\n\
Example: view n/John Doe";
}

pub const VIEW_TASKS_WORD: &str = "viewtasks";
pub const VIEW_TASKS_USAGE: &str = "viewtasks: Shows the tasks of every student.";

/// A fully validated user command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Add(AddCommand),
    Update(UpdateCommand),
    Delete(DeleteCommand),
    Clear,
    Find(FindCommand),
    Note(NoteCommand),
    List,
    Exit,
    Help,
    Tag(TagCommand),
    AddTask(AddTaskCommand),
    UpdateTask(UpdateTaskCommand),
    DeleteTask(DeleteTaskCommand),
    View(ViewCommand),
    ViewTasks,
}

impl Command {
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::COMMAND_WORD,
            Self::Update(_) => UpdateCommand::COMMAND_WORD,
            Self::Delete(_) => DeleteCommand::COMMAND_WORD,
            Self::Clear => CLEAR_WORD,
            Self::Find(_) => FindCommand::COMMAND_WORD,
            Self::Note(_) => NoteCommand::COMMAND_WORD,
            Self::List => LIST_WORD,
            Self::Exit => EXIT_WORD,
            Self::Help => HELP_WORD,
            Self::Tag(_) => TagCommand::COMMAND_WORD,
            Self::AddTask(_) => AddTaskCommand::COMMAND_WORD,
            Self::UpdateTask(_) => UpdateTaskCommand::COMMAND_WORD,
            Self::DeleteTask(_) => DeleteTaskCommand::COMMAND_WORD,
            Self::View(_) => ViewCommand::COMMAND_WORD,
            Self::ViewTasks => VIEW_TASKS_WORD,
        }
    }

    /// True for commands that change the book and should be persisted.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add(_)
                | Self::Update(_)
                | Self::Delete(_)
                | Self::Clear
                | Self::Note(_)
                | Self::Tag(_)
                | Self::AddTask(_)
                | Self::UpdateTask(_)
                | Self::DeleteTask(_)
        )
    }

    /// Canonical input text. Parsing it yields an equal command.
    pub fn to_input(&self) -> String {
        let mut line = InputLine::new(self.word());
        match self {
            Self::Add(AddCommand { student }) => {
                line.field(PREFIX_NAME, student.name.as_str());
                line.field(PREFIX_PHONE, student.phone.as_str());
                line.field(PREFIX_ADDRESS, student.address.as_str());
                if !student.emergency_contact.is_empty() {
                    line.field(PREFIX_EMERGENCY_CONTACT, student.emergency_contact.as_str());
                }
                if !student.note.is_empty() {
                    line.field(PREFIX_NOTE, student.note.as_str());
                }
                if let Some(level) = &student.level {
                    line.field(PREFIX_LEVEL, level);
                }
                for subject in &student.subjects {
                    line.field(PREFIX_SUBJECT, subject);
                }
                for slot in &student.lesson_times {
                    line.field(PREFIX_LESSON_TIME, slot);
                }
            }
            Self::Update(UpdateCommand { name, descriptor }) => {
                line.field(PREFIX_NAME, name);
                line.descriptor(descriptor);
            }
            Self::Tag(TagCommand { name, descriptor }) => {
                line.field(PREFIX_NAME, name);
                line.descriptor(descriptor);
            }
            Self::Delete(DeleteCommand { name }) | Self::View(ViewCommand { name }) => {
                line.field(PREFIX_NAME, name);
            }
            Self::Find(FindCommand { predicate }) => match predicate {
                FindPredicate::NameKeywords(words) => line.field(PREFIX_NAME, words.join(" ")),
                FindPredicate::Level(level) => line.field(PREFIX_LEVEL, level),
                FindPredicate::SubjectKeywords(words) => {
                    line.field(PREFIX_SUBJECT, words.join(" "))
                }
            },
            Self::Note(NoteCommand { name, note }) => {
                line.field(PREFIX_NAME, name);
                line.field(PREFIX_NOTE, note.as_str());
            }
            Self::AddTask(AddTaskCommand { name, task }) => {
                line.field(PREFIX_NAME, name);
                line.field(PREFIX_TASK_DESCRIPTION, &task.description);
                line.field(PREFIX_TASK_DEADLINE, task.deadline);
            }
            Self::UpdateTask(UpdateTaskCommand {
                name,
                index,
                descriptor,
            }) => {
                line.field(PREFIX_NAME, name);
                line.field(PREFIX_TASK_INDEX, index);
                if let Some(description) = &descriptor.description {
                    line.field(PREFIX_TASK_DESCRIPTION, description);
                }
                if let Some(deadline) = &descriptor.deadline {
                    line.field(PREFIX_TASK_DEADLINE, deadline);
                }
            }
            Self::DeleteTask(DeleteTaskCommand { name, index }) => {
                line.field(PREFIX_NAME, name);
                line.field(PREFIX_TASK_INDEX, index);
            }
            Self::Clear | Self::List | Self::Exit | Self::Help | Self::ViewTasks => {}
        }
        line.finish()
    }
}

struct InputLine(String);

impl InputLine {
    fn new(word: &str) -> Self {
        Self(word.to_string())
    }

    fn field(&mut self, prefix: crate::parser::syntax::Prefix, value: impl std::fmt::Display) {
        self.0.push(' ');
        self.0.push_str(prefix.as_str());
        self.0.push_str(&value.to_string());
    }

    fn descriptor(&mut self, d: &UpdateStudentDescriptor) {
        if let Some(phone) = &d.phone {
            self.field(PREFIX_PHONE, phone);
        }
        if let Some(address) = &d.address {
            self.field(PREFIX_ADDRESS, address);
        }
        if let Some(contact) = &d.emergency_contact {
            self.field(PREFIX_EMERGENCY_CONTACT, contact);
        }
        if let Some(note) = &d.note {
            self.field(PREFIX_NOTE, note);
        }
        if let Some(level) = &d.level {
            self.field(PREFIX_LEVEL, level);
        }
        if let Some(subjects) = &d.subjects {
            for subject in subjects {
                self.field(PREFIX_SUBJECT, subject);
            }
        }
        match &d.lesson_times {
            Some(slots) if slots.is_empty() => self.field(PREFIX_LESSON_TIME, ""),
            Some(slots) => {
                for slot in slots {
                    self.field(PREFIX_LESSON_TIME, slot);
                }
            }
            None => {}
        }
    }

    fn finish(self) -> String {
        self.0
    }
}

/// Usage text for every command word, in help order.
pub fn all_usages() -> [&'static str; 15] {
    [
        AddCommand::USAGE,
        UpdateCommand::USAGE,
        DeleteCommand::USAGE,
        CLEAR_USAGE,
        FindCommand::USAGE,
        NoteCommand::USAGE,
        LIST_USAGE,
        EXIT_USAGE,
        HELP_USAGE,
        TagCommand::USAGE,
        AddTaskCommand::USAGE,
        UpdateTaskCommand::USAGE,
        DeleteTaskCommand::USAGE,
        ViewCommand::USAGE,
        VIEW_TASKS_USAGE,
    ]
}
