//! Partial-update bags built by `update`, `tag` and `updatetask`.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{
    Address, EmergencyContact, LessonTime, Level, Note, Phone, Subject, TaskDeadline,
    TaskDescription,
};

/// Fields of a student to overwrite. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateStudentDescriptor {
    pub phone: Option<Phone>,
    pub address: Option<Address>,
    pub emergency_contact: Option<EmergencyContact>,
    pub note: Option<Note>,
    pub level: Option<Level>,
    pub subjects: Option<BTreeSet<Subject>>,
    /// `Some(vec![])` clears every lesson slot.
    pub lesson_times: Option<Vec<LessonTime>>,
}

impl UpdateStudentDescriptor {
    pub fn is_any_field_updated(&self) -> bool {
        self.phone.is_some()
            || self.address.is_some()
            || self.emergency_contact.is_some()
            || self.note.is_some()
            || self.level.is_some()
            || self.subjects.is_some()
            || self.lesson_times.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTaskDescriptor {
    pub description: Option<TaskDescription>,
    pub deadline: Option<TaskDeadline>,
}

impl UpdateTaskDescriptor {
    pub fn is_any_field_updated(&self) -> bool {
        self.description.is_some() || self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_descriptors_update_nothing() {
        assert!(!UpdateStudentDescriptor::default().is_any_field_updated());
        assert!(!UpdateTaskDescriptor::default().is_any_field_updated());
    }

    #[test]
    fn clearing_counts_as_an_update() {
        let d = UpdateStudentDescriptor {
            lesson_times: Some(Vec::new()),
            ..Default::default()
        };
        assert!(d.is_any_field_updated());
        let d = UpdateTaskDescriptor {
            description: Some(TaskDescription::new("essay").unwrap()),
            ..Default::default()
        };
        assert!(d.is_any_field_updated());
    }
}
