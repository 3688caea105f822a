//! Date and time-slot selection for the schedule screen.

use crate::catalog::{Catalog, DateId, SlotId};
use crate::error::BookingError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ScheduleState {
    pub date: Option<DateId>,
    pub slot: Option<SlotId>,
}

/// Effect of a slot click.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SlotOutcome {
    Selected,
    Replaced,
    Cleared,
    /// The slot is unavailable; nothing changed.
    Ignored,
}

/// Owns the [`ScheduleState`].
///
/// `is_valid` only asks whether a date and a slot are both held. It does
/// not check that the slot belongs to the date: callers are expected to
/// emit slot clicks only for the date currently on screen.
#[derive(Clone, Debug, Default)]
pub struct ScheduleSelection {
    state: ScheduleState,
}

impl ScheduleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a fresh visit to the schedule screen: the default-active
    /// date (if the catalog marks one) and no slot.
    pub fn seed(&mut self, catalog: &Catalog) {
        self.state = ScheduleState {
            date: catalog.default_date(),
            slot: None,
        };
        log::debug!("schedule seeded with {:?}", self.state.date);
    }

    /// Replace the selected date. The slot selection is kept as is.
    pub fn select_date(&mut self, catalog: &Catalog, date: DateId) -> Result<(), BookingError> {
        if catalog.date(date).is_none() {
            return Err(BookingError::UnknownDate(date));
        }
        log::debug!("{date} selected");
        self.state.date = Some(date);
        Ok(())
    }

    pub fn select_slot(
        &mut self,
        catalog: &Catalog,
        slot: SlotId,
    ) -> Result<SlotOutcome, BookingError> {
        let time_slot = catalog.slot(slot).ok_or(BookingError::UnknownSlot(slot))?;

        let outcome = if !time_slot.status.is_open() {
            log::warn!("ignoring click on unavailable {slot} ({})", time_slot.time);
            SlotOutcome::Ignored
        } else if self.state.slot == Some(slot) {
            self.state.slot = None;
            SlotOutcome::Cleared
        } else {
            let outcome = if self.state.slot.is_some() {
                SlotOutcome::Replaced
            } else {
                SlotOutcome::Selected
            };
            self.state.slot = Some(slot);
            outcome
        };

        log::debug!("{slot} clicked: {outcome:?}");
        Ok(outcome)
    }

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    pub fn date(&self) -> Option<DateId> {
        self.state.date
    }

    pub fn slot(&self) -> Option<SlotId> {
        self.state.slot
    }

    pub fn is_valid(&self) -> bool {
        self.state.date.is_some() && self.state.slot.is_some()
    }
}
