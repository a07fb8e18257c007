use std::collections::BTreeSet;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::{
    Address, EmergencyContact, LessonTime, Level, Name, Note, Phone, Subject, Task,
};

/// One student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: Name,
    pub phone: Phone,
    #[serde(default)]
    pub emergency_contact: EmergencyContact,
    pub address: Address,
    #[serde(default)]
    pub note: Note,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub subjects: BTreeSet<Subject>,
    #[serde(default)]
    pub lesson_times: Vec<LessonTime>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Student {
    pub fn new(name: Name, phone: Phone, address: Address) -> Self {
        Self {
            name,
            phone,
            emergency_contact: EmergencyContact::default(),
            address,
            note: Note::default(),
            level: None,
            subjects: BTreeSet::new(),
            lesson_times: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    /// Inserts keeping tasks ordered by deadline, then description.
    pub fn insert_task(&mut self, task: Task) {
        self.tasks.push(task);
        self.sort_tasks();
    }

    pub fn sort_tasks(&mut self) {
        self.tasks.sort_by(|a, b| {
            a.deadline
                .cmp(&b.deadline)
                .then_with(|| a.description.cmp(&b.description))
        });
    }

    pub fn set_lesson_times(&mut self, mut slots: Vec<LessonTime>) {
        slots.sort();
        slots.dedup();
        self.lesson_times = slots;
    }

    /// Multi-line details used by `view`.
    pub fn details(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.name);
        let _ = writeln!(out, "  Phone: {}", self.phone);
        if !self.emergency_contact.is_empty() {
            let _ = writeln!(out, "  Emergency contact: {}", self.emergency_contact);
        }
        let _ = writeln!(out, "  Address: {}", self.address);
        if let Some(level) = &self.level {
            let _ = writeln!(out, "  Level: {level}");
        }
        if !self.subjects.is_empty() {
            let subjects: Vec<&str> = self.subjects.iter().map(Subject::as_str).collect();
            let _ = writeln!(out, "  Subjects: {}", subjects.join(", "));
        }
        if !self.lesson_times.is_empty() {
            let slots: Vec<String> = self.lesson_times.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "  Lessons: {}", slots.join(", "));
        }
        if !self.note.is_empty() {
            let _ = writeln!(out, "  Note: {}", self.note);
        }
        let _ = write!(out, "  Tasks: {}", self.tasks.len());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TaskDeadline, TaskDescription};

    fn task(desc: &str, deadline: &str) -> Task {
        Task::new(
            TaskDescription::new(desc).unwrap(),
            TaskDeadline::new(deadline).unwrap(),
        )
    }

    fn student() -> Student {
        Student::new(
            Name::new("Amy Bee").unwrap(),
            Phone::new("85355255").unwrap(),
            Address::new("123, Jurong West Ave 6").unwrap(),
        )
    }

    #[test]
    fn tasks_stay_sorted() {
        let mut s = student();
        s.insert_task(task("essay", "2031-05-01"));
        s.insert_task(task("worksheet", "2030-01-01"));
        s.insert_task(task("algebra", "2031-05-01"));
        let order: Vec<&str> = s.tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(order, vec!["worksheet", "algebra", "essay"]);
        assert!(s.has_task(&task("essay", "2031-05-01")));
    }

    #[test]
    fn details_skip_empty_fields() {
        let s = student();
        let details = s.details();
        assert!(details.contains("Phone: 85355255"));
        assert!(!details.contains("Note:"));
        assert!(!details.contains("Level:"));
    }

    #[test]
    fn lesson_times_deduplicated() {
        let mut s = student();
        let slot = LessonTime::new("Sun 10:00-11:00").unwrap();
        s.set_lesson_times(vec![slot, slot]);
        assert_eq!(s.lesson_times.len(), 1);
    }
}
