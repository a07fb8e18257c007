//! Parse, execute and persist a sequence of commands, the way the REPL does.

mod common;

use common::parse;
use tutorbook_core::storage::{load_book, save_book};
use tutorbook_core::{CommandError, StudentBook, UiState};

fn run(book: &mut StudentBook, input: &str) -> Result<String, CommandError> {
    let cmd = parse(input).unwrap_or_else(|e| panic!("{input}: {e}"));
    cmd.execute(book).map(|outcome| outcome.feedback)
}

#[test]
fn tutor_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let mut book = load_book(&path).unwrap();

    run(&mut book, "add n/Bob Choo p/98765432 a/Blk 30, #06-40 l/S2 NA s/MATH").unwrap();
    run(&mut book, "addtask n/bob choo t/Algebra worksheet d/2099-03-01").unwrap();
    run(&mut book, "addtask n/Bob Choo t/Geometry quiz d/2099-02-01").unwrap();
    assert_eq!(
        run(&mut book, "addtask n/Bob Choo t/Geometry quiz d/2099-02-01"),
        Err(CommandError::DuplicateTask("Bob Choo".into()))
    );
    assert!(matches!(
        run(&mut book, "tag n/Bob Choo s/PHYSICS"),
        Err(CommandError::SubjectNotOffered(_))
    ));
    run(&mut book, "deletetask n/Bob Choo ti/1").unwrap();
    save_book(&path, &book).unwrap();

    let reloaded = load_book(&path).unwrap();
    let bob = &reloaded.students()[0];
    assert_eq!(bob.tasks.len(), 1);
    assert_eq!(bob.tasks[0].description.as_str(), "Algebra worksheet");
    assert_eq!(reloaded, book);
}

#[test]
fn unknown_student_is_reported_by_execution() {
    let mut book = StudentBook::new();
    assert_eq!(
        run(&mut book, "view n/Nobody"),
        Err(CommandError::StudentNotFound("Nobody".into()))
    );
}

#[test]
fn panel_follows_last_routed_command() {
    let mut ui = UiState::Details;
    let _ = tutorbook_core::parse_command("viewtasks", &mut ui);
    let _ = tutorbook_core::parse_command("addtask n/Bob", &mut ui);
    assert_eq!(ui, UiState::Tasks);
    let _ = tutorbook_core::parse_command("list", &mut ui);
    assert_eq!(ui, UiState::Details);
}
