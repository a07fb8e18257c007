mod common;

use common::{
    assert_parse_failure, assert_parse_kind, assert_parse_success, extra_prefix, invalid_format,
    parse,
};
use tutorbook_core::command::{
    AddTaskCommand, DeleteTaskCommand, FindCommand, FindPredicate, NoteCommand, TagCommand,
    TaskIndex, UpdateCommand, UpdateStudentDescriptor, UpdateTaskCommand, UpdateTaskDescriptor,
    ViewCommand,
};
use tutorbook_core::error::ErrorKind;
use tutorbook_core::model::{Level, Name, Note, Subject, Task, TaskDeadline, TaskDescription};
use tutorbook_core::Command;

fn name(raw: &str) -> Name {
    Name::new(raw).unwrap()
}

fn index(i: usize) -> TaskIndex {
    TaskIndex::from_one_based(i).unwrap()
}

#[test]
fn delete_task_tolerates_surrounding_whitespace() {
    assert_parse_success(
        "deletetask  n/ Bob Choo  \n ti/ 1 ",
        Command::DeleteTask(DeleteTaskCommand {
            name: name("Bob Choo"),
            index: index(1),
        }),
    );
}

#[test]
fn delete_task_index_must_be_positive_integer() {
    for bad in ["0", "-5", "abc", "1 a", "+1"] {
        assert_parse_failure(
            &format!("deletetask n/Bob ti/{bad}"),
            "Task index is not a non-zero unsigned integer.",
        );
    }
}

#[test]
fn delete_task_duplicate_prefixes_listed_together() {
    assert_parse_failure(
        "deletetask n/Bob ti/1 n/Amy ti/2",
        "Multiple values specified for the following single-valued field(s): n/ ti/",
    );
}

#[test]
fn view_parses_single_name() {
    assert_parse_success(
        "view n/Alice Pauline",
        Command::View(ViewCommand {
            name: name("alice pauline"),
        }),
    );
    assert_parse_failure("view", &invalid_format(ViewCommand::USAGE));
    assert_parse_failure("view n/Alice t/x", &extra_prefix(ViewCommand::USAGE));
}

#[test]
fn find_accepts_exactly_one_key() {
    assert_parse_success(
        "find s/math physics",
        Command::Find(FindCommand {
            predicate: FindPredicate::SubjectKeywords(vec!["math".into(), "physics".into()]),
        }),
    );
    assert_parse_failure("find n/Alice l/S1 NA", &invalid_format(FindCommand::USAGE));
    assert_parse_failure("find alice", &invalid_format(FindCommand::USAGE));
    assert_parse_failure("find", &invalid_format(FindCommand::USAGE));
    assert_parse_failure("find n/Alice p/123", &extra_prefix(FindCommand::USAGE));
    assert_parse_failure("find l/S9 NA", Level::MESSAGE_CONSTRAINTS);
    assert_parse_failure("find s/art", Subject::MESSAGE_CONSTRAINTS);
}

#[test]
fn find_with_blank_key_reports_field_rule() {
    assert_parse_failure("find n/", Name::MESSAGE_CONSTRAINTS);
    assert_parse_failure("find s/", Subject::MESSAGE_CONSTRAINTS);
    assert_parse_failure("find l/", Level::MESSAGE_CONSTRAINTS);
    assert_parse_failure("find  n/   ", Name::MESSAGE_CONSTRAINTS);
}

#[test]
fn note_may_be_cleared() {
    assert_parse_success(
        "note n/Bob nt/",
        Command::Note(NoteCommand {
            name: name("Bob"),
            note: Note::default(),
        }),
    );
    assert_parse_success(
        "note n/Bob nt/  Struggles with fractions, e.g. 1/2 ",
        Command::Note(NoteCommand {
            name: name("Bob"),
            note: Note::new("Struggles with fractions, e.g. 1/2"),
        }),
    );
    assert_parse_failure("note n/Bob", &invalid_format(NoteCommand::USAGE));
}

#[test]
fn tag_checks_subjects_against_level_in_command() {
    let level = Level::new("S2 NA").unwrap();
    assert_parse_failure(
        "tag n/Bob l/S2 NA s/CHEMISTRY",
        &Subject::level_message(&level),
    );
    assert_parse_failure("tag n/Bob s/CHEMISTRY s/DRAMA", Subject::MESSAGE_CONSTRAINTS);

    let mut subjects = std::collections::BTreeSet::new();
    subjects.insert(Subject::new("SCIENCE").unwrap());
    assert_parse_success(
        "tag n/Bob l/s2  na s/science",
        Command::Tag(TagCommand {
            name: name("Bob"),
            descriptor: UpdateStudentDescriptor {
                level: Some(level),
                subjects: Some(subjects),
                ..Default::default()
            },
        }),
    );
}

#[test]
fn tag_duplicate_level_reported_before_field_errors() {
    assert_parse_failure(
        "tag n/B*b l/S1 NA l/S2 NA",
        "Multiple values specified for the following single-valued field(s): l/",
    );
}

#[test]
fn add_task_parses_all_fields() {
    assert_parse_success(
        "addtask n/Bob Choo t/Mark essay d/2099-12-25",
        Command::AddTask(AddTaskCommand {
            name: name("Bob Choo"),
            task: Task::new(
                TaskDescription::new("Mark essay").unwrap(),
                TaskDeadline::new("2099-12-25").unwrap(),
            ),
        }),
    );
    assert_parse_failure(
        "addtask n/Bob t/essay d/2099-02-30",
        TaskDeadline::MESSAGE_CONSTRAINTS,
    );
    assert_parse_failure(
        "addtask n/Bob t/essay d/1999-12-31",
        TaskDeadline::MESSAGE_CONSTRAINTS_PAST_DATE,
    );
}

#[test]
fn add_task_accepts_today() {
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let cmd = parse(&format!("addtask n/Bob t/essay d/{today}")).unwrap();
    assert!(matches!(cmd, Command::AddTask(_)));
}

#[test]
fn update_task_requires_a_field() {
    assert_parse_failure(
        "updatetask n/Bob ti/2",
        "At least one field to update must be provided.",
    );
    assert_parse_success(
        "updatetask n/Bob ti/2 t/Revise",
        Command::UpdateTask(UpdateTaskCommand {
            name: name("Bob"),
            index: index(2),
            descriptor: UpdateTaskDescriptor {
                description: Some(TaskDescription::new("Revise").unwrap()),
                deadline: None,
            },
        }),
    );
}

#[test]
fn update_parses_descriptor() {
    let cmd = parse("update n/Bob p/91234567 lt/Mon 09:00-10:00 lt/sun 11:00-12:00").unwrap();
    let Command::Update(UpdateCommand { name: n, descriptor }) = cmd else {
        panic!("expected update");
    };
    assert_eq!(n, name("bob"));
    assert_eq!(descriptor.phone.unwrap().as_str(), "91234567");
    assert_eq!(descriptor.lesson_times.unwrap().len(), 2);
}

#[test]
fn name_is_validated_first() {
    assert_parse_failure("update n/B@b p/x", Name::MESSAGE_CONSTRAINTS);
    assert_parse_kind("add n/Bob p/1 a/Blk 1", ErrorKind::ConstraintViolation);
}
