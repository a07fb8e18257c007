use std::fmt::Write as _;

use serde::Serialize;

use super::{
    AddCommand, AddTaskCommand, Command, DeleteCommand, DeleteTaskCommand, FindCommand,
    NoteCommand, TagCommand, TaskIndex, UpdateCommand, UpdateStudentDescriptor,
    UpdateTaskCommand, ViewCommand,
};
use crate::error::CommandError;
use crate::model::{Name, Student, StudentBook, Subject, Task};

/// Result of running one command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub feedback: String,
    pub exit: bool,
    pub show_help: bool,
    /// Students to display, for `list` and `find`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub students: Vec<Student>,
}

impl CommandOutcome {
    fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Default::default()
        }
    }

    fn listing(feedback: impl Into<String>, students: Vec<Student>) -> Self {
        Self {
            feedback: feedback.into(),
            students,
            ..Default::default()
        }
    }
}

impl Command {
    /// Applies the command to `book`. On error the book is left unchanged.
    #[tracing::instrument(level = "debug", skip_all, fields(command = self.word()))]
    pub fn execute(&self, book: &mut StudentBook) -> Result<CommandOutcome, CommandError> {
        let outcome = match self {
            Self::Add(AddCommand { student }) => {
                if !book.add(student.clone()) {
                    return Err(CommandError::DuplicateStudent(student.name.to_string()));
                }
                CommandOutcome::message(format!("New student added: {}", student.name))
            }
            Self::Update(UpdateCommand { name, descriptor }) => {
                let student = student_mut(book, name)?;
                apply_descriptor(student, descriptor)?;
                CommandOutcome::message(format!("Updated student: {}", student.name))
            }
            Self::Delete(DeleteCommand { name }) => {
                let removed = book
                    .remove(name)
                    .ok_or_else(|| CommandError::StudentNotFound(name.to_string()))?;
                CommandOutcome::message(format!("Deleted student: {}", removed.name))
            }
            Self::Clear => {
                book.clear();
                CommandOutcome::message("Student book has been cleared!")
            }
            Self::Find(FindCommand { predicate }) => {
                let found: Vec<Student> = book
                    .students()
                    .iter()
                    .filter(|s| predicate.matches(s))
                    .cloned()
                    .collect();
                CommandOutcome::listing(format!("{} students listed!", found.len()), found)
            }
            Self::Note(NoteCommand { name, note }) => {
                let student = student_mut(book, name)?;
                student.note = note.clone();
                if note.is_empty() {
                    CommandOutcome::message(format!("Removed note from {}", student.name))
                } else {
                    CommandOutcome::message(format!("Added note to {}", student.name))
                }
            }
            Self::List => {
                CommandOutcome::listing("Listed all students", book.students().to_vec())
            }
            Self::Exit => CommandOutcome {
                feedback: "Exiting as requested ...".to_string(),
                exit: true,
                ..Default::default()
            },
            Self::Help => CommandOutcome {
                feedback: "Opened help window.".to_string(),
                show_help: true,
                ..Default::default()
            },
            Self::Tag(TagCommand { name, descriptor }) => {
                let student = student_mut(book, name)?;
                apply_descriptor(student, descriptor)?;
                CommandOutcome::message(format!("Tagged {}: {}", student.name, tags(student)))
            }
            Self::AddTask(AddTaskCommand { name, task }) => {
                let student = student_mut(book, name)?;
                if student.has_task(task) {
                    return Err(CommandError::DuplicateTask(student.name.to_string()));
                }
                student.insert_task(task.clone());
                CommandOutcome::message(format!("New task added for {}: {task}", student.name))
            }
            Self::UpdateTask(UpdateTaskCommand {
                name,
                index,
                descriptor,
            }) => {
                let student = student_mut(book, name)?;
                let position = task_position(student, *index)?;
                let original = &student.tasks[position];
                let edited = Task::new(
                    descriptor
                        .description
                        .clone()
                        .unwrap_or_else(|| original.description.clone()),
                    descriptor.deadline.unwrap_or(original.deadline),
                );
                if &edited != original && student.has_task(&edited) {
                    return Err(CommandError::DuplicateTask(student.name.to_string()));
                }
                student.tasks[position] = edited.clone();
                student.sort_tasks();
                CommandOutcome::message(format!(
                    "Updated task {index} of {}: {edited}",
                    student.name
                ))
            }
            Self::DeleteTask(DeleteTaskCommand { name, index }) => {
                let student = student_mut(book, name)?;
                let position = task_position(student, *index)?;
                let removed = student.tasks.remove(position);
                CommandOutcome::message(format!("Deleted task from {}: {removed}", student.name))
            }
            Self::View(ViewCommand { name }) => {
                let student = book
                    .find(name)
                    .ok_or_else(|| CommandError::StudentNotFound(name.to_string()))?;
                CommandOutcome::message(student.details())
            }
            Self::ViewTasks => CommandOutcome::message(task_overview(book)),
        };
        tracing::debug!(feedback = %outcome.feedback, "command executed");
        Ok(outcome)
    }
}

fn student_mut<'a>(book: &'a mut StudentBook, name: &Name) -> Result<&'a mut Student, CommandError> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::StudentNotFound(name.to_string()))
}

fn task_position(student: &Student, index: TaskIndex) -> Result<usize, CommandError> {
    let position = index.zero_based();
    if position >= student.tasks.len() {
        return Err(CommandError::TaskIndexOutOfRange {
            name: student.name.to_string(),
            index: index.one_based(),
            count: student.tasks.len(),
        });
    }
    Ok(position)
}

/// Checks the whole descriptor before touching `student`.
///
/// Subjects supplied without a level must be offered at the student's stored
/// level. A new level without new subjects drops stored subjects it does not offer.
fn apply_descriptor(
    student: &mut Student,
    descriptor: &UpdateStudentDescriptor,
) -> Result<(), CommandError> {
    let level = descriptor.level.or(student.level);
    if let (Some(subjects), Some(level)) = (&descriptor.subjects, level.as_ref()) {
        if subjects.iter().any(|s| !s.is_offered_at(level)) {
            return Err(CommandError::SubjectNotOffered(Subject::level_message(level)));
        }
    }

    if let Some(phone) = &descriptor.phone {
        student.phone = phone.clone();
    }
    if let Some(address) = &descriptor.address {
        student.address = address.clone();
    }
    if let Some(contact) = &descriptor.emergency_contact {
        student.emergency_contact = contact.clone();
    }
    if let Some(note) = &descriptor.note {
        student.note = note.clone();
    }
    if let Some(new_level) = descriptor.level {
        student.level = Some(new_level);
        if descriptor.subjects.is_none() {
            student.subjects.retain(|s| s.is_offered_at(&new_level));
        }
    }
    if let Some(subjects) = &descriptor.subjects {
        student.subjects = subjects.clone();
    }
    if let Some(slots) = &descriptor.lesson_times {
        student.set_lesson_times(slots.clone());
    }
    Ok(())
}

fn tags(student: &Student) -> String {
    let level = student
        .level
        .map(|l| l.to_string())
        .unwrap_or_else(|| "no level".to_string());
    let subjects: Vec<&str> = student.subjects.iter().map(Subject::as_str).collect();
    if subjects.is_empty() {
        level
    } else {
        format!("{level}; {}", subjects.join(", "))
    }
}

fn task_overview(book: &StudentBook) -> String {
    let mut out = String::new();
    for student in book.students().iter().filter(|s| !s.tasks.is_empty()) {
        let _ = writeln!(out, "{}", student.name);
        for (i, task) in student.tasks.iter().enumerate() {
            let _ = writeln!(out, "  {}. {task}", i + 1);
        }
    }
    if out.is_empty() {
        return "No tasks".to_string();
    }
    out.truncate(out.trim_end().len());
    out
}
