//! Which panel the front end shows next to the student list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiState {
    #[default]
    Details,
    Tasks,
}

impl UiState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::Tasks => "tasks",
        }
    }
}

/// Receives panel switches from the dispatcher.
pub trait UiStateSink {
    fn set_state(&mut self, state: UiState);
}

impl UiStateSink for UiState {
    fn set_state(&mut self, state: UiState) {
        *self = state;
    }
}
