//! Precondition violations raised by the booking core.
//!
//! These signal wiring defects in the presentation layer (an event for a
//! record that was never loaded, a summary requested too early), not user
//! mistakes. Incomplete or unavailable selections are reported through the
//! controllers' derived text instead.

use crate::catalog::{DateId, SlotId, StationId};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("{0} is not in the loaded catalog")]
    UnknownStation(StationId),

    #[error("{0} is not in the loaded catalog")]
    UnknownDate(DateId),

    #[error("{0} is not tied to any loaded date")]
    UnknownSlot(SlotId),

    #[error("booking summary requires both an origin and a destination")]
    IncompleteSelection,

    #[error("booking summary requires both a date and a time slot")]
    IncompleteSchedule,
}
