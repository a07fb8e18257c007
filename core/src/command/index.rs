use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// 1-based position of a task in a student's task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskIndex(NonZeroUsize);

impl TaskIndex {
    pub fn from_one_based(index: usize) -> Option<Self> {
        NonZeroUsize::new(index).map(Self)
    }

    pub fn one_based(self) -> usize {
        self.0.get()
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
