use serde::{Deserialize, Serialize};

use super::{Name, Student};

/// In-memory collection of students, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentBook {
    #[serde(default)]
    students: Vec<Student>,
}

impl StudentBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, name: &Name) -> bool {
        self.find(name).is_some()
    }

    pub fn find(&self, name: &Name) -> Option<&Student> {
        self.students.iter().find(|s| &s.name == name)
    }

    pub fn find_mut(&mut self, name: &Name) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| &s.name == name)
    }

    /// Adds `student`; returns false if the name is taken.
    pub fn add(&mut self, student: Student) -> bool {
        if self.contains(&student.name) {
            return false;
        }
        self.students.push(student);
        true
    }

    pub fn remove(&mut self, name: &Name) -> Option<Student> {
        let idx = self.students.iter().position(|s| &s.name == name)?;
        Some(self.students.remove(idx))
    }

    pub fn clear(&mut self) {
        self.students.clear();
    }

    /// Names that appear more than once. Only a hand-edited data file can
    /// produce these.
    pub fn duplicate_names(&self) -> Vec<&Name> {
        let mut seen: Vec<&Name> = Vec::new();
        let mut dups = Vec::new();
        for s in &self.students {
            if seen.contains(&&s.name) {
                if !dups.contains(&&s.name) {
                    dups.push(&s.name);
                }
            } else {
                seen.push(&s.name);
            }
        }
        dups
    }
}
