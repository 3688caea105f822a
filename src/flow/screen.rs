use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four mutually exclusive screens of the wizard.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Screen {
    /// Origin and destination picking.
    Selecting,
    /// Date and time-slot picking.
    Scheduling,
    /// Confirmation modal over the schedule screen.
    Confirming,
    /// Booking completed.
    Done,
}

impl State for Screen {
    fn name(&self) -> &str {
        match self {
            Self::Selecting => "Selecting",
            Self::Scheduling => "Scheduling",
            Self::Confirming => "Confirming",
            Self::Done => "Done",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
