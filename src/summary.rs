//! Confirmation payload for the booking modal.

use crate::catalog::{Catalog, DateOption, TimeSlot};
use crate::config::BookingConfig;
use crate::error::BookingError;
use crate::schedule::ScheduleState;
use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};

/// Text shown in the confirmation modal.
///
/// Facility glyphs are those of the destination station.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BookingSummary {
    pub datetime: String,
    pub origin: String,
    pub destination: String,
    pub locker: String,
    pub shower: String,
}

impl BookingSummary {
    /// Build the summary for a complete selection.
    ///
    /// Only completeness is checked here; facility validity is the station
    /// controller's concern and must already hold.
    pub fn try_build(
        catalog: &Catalog,
        config: &BookingConfig,
        selection: &SelectionState,
        schedule: &ScheduleState,
    ) -> Result<Self, BookingError> {
        let (Some(origin_id), Some(destination_id)) = (selection.origin, selection.destination)
        else {
            return Err(BookingError::IncompleteSelection);
        };
        let (Some(date_id), Some(slot_id)) = (schedule.date, schedule.slot) else {
            return Err(BookingError::IncompleteSchedule);
        };

        let origin = catalog
            .station(origin_id)
            .ok_or(BookingError::UnknownStation(origin_id))?;
        let destination = catalog
            .station(destination_id)
            .ok_or(BookingError::UnknownStation(destination_id))?;
        let date = catalog
            .date(date_id)
            .ok_or(BookingError::UnknownDate(date_id))?;
        let slot = catalog
            .slot(slot_id)
            .ok_or(BookingError::UnknownSlot(slot_id))?;

        Ok(Self {
            datetime: format_datetime(config, date, slot),
            origin: origin.name.clone(),
            destination: destination.name.clone(),
            locker: destination.locker.glyph().to_string(),
            shower: destination.shower.glyph().to_string(),
        })
    }

    /// Like [`try_build`](Self::try_build), for callers that have already
    /// checked both controllers.
    ///
    /// # Panics
    ///
    /// Panics when the selection or schedule is incomplete, or refers to
    /// records missing from `catalog`.
    pub fn build(
        catalog: &Catalog,
        config: &BookingConfig,
        selection: &SelectionState,
        schedule: &ScheduleState,
    ) -> Self {
        match Self::try_build(catalog, config, selection, schedule) {
            Ok(summary) => summary,
            Err(err) => panic!("cannot build booking summary: {err}"),
        }
    }
}

/// `<year>年<month>月<day>日(<day-of-week>) <time>`
pub fn format_datetime(config: &BookingConfig, date: &DateOption, slot: &TimeSlot) -> String {
    format!(
        "{}年{}月{}日({}) {}",
        config.year, config.month, date.day, date.day_of_week, slot.time
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;
    use crate::catalog::{DateId, SlotId, SlotStatus, StationId};

    fn complete() -> (SelectionState, ScheduleState) {
        (
            SelectionState {
                origin: Some(StationId(0)),
                destination: Some(StationId(2)),
            },
            ScheduleState {
                date: Some(DateId(0)),
                slot: Some(SlotId::new(DateId(0), 2)),
            },
        )
    }

    #[test]
    fn builds_confirmation_text() {
        let (selection, schedule) = complete();

        let summary = BookingSummary::build(
            &sample_catalog(),
            &BookingConfig::default(),
            &selection,
            &schedule,
        );

        assert_eq!(summary.datetime, "2025年7月14日(月) 12:00");
        assert_eq!(summary.origin, "東京");
        assert_eq!(summary.destination, "渋谷");
        assert_eq!(summary.locker, "△");
        assert_eq!(summary.shower, "○");
    }

    #[test]
    fn year_and_month_come_from_config() {
        let config = BookingConfig {
            year: 2026,
            month: 3,
        };
        let date = DateOption::new(9, "月");
        let slot = TimeSlot::new("08:30", SlotStatus::Available);

        assert_eq!(format_datetime(&config, &date, &slot), "2026年3月9日(月) 08:30");
    }

    #[test]
    fn incomplete_selection_is_rejected() {
        let (mut selection, schedule) = complete();
        selection.destination = None;

        let result = BookingSummary::try_build(
            &sample_catalog(),
            &BookingConfig::default(),
            &selection,
            &schedule,
        );

        assert_eq!(result, Err(BookingError::IncompleteSelection));
    }

    #[test]
    fn incomplete_schedule_is_rejected() {
        let (selection, mut schedule) = complete();
        schedule.slot = None;

        let result = BookingSummary::try_build(
            &sample_catalog(),
            &BookingConfig::default(),
            &selection,
            &schedule,
        );

        assert_eq!(result, Err(BookingError::IncompleteSchedule));
    }

    #[test]
    #[should_panic(expected = "cannot build booking summary")]
    fn build_panics_on_incomplete_state() {
        BookingSummary::build(
            &sample_catalog(),
            &BookingConfig::default(),
            &SelectionState::default(),
            &ScheduleState::default(),
        );
    }
}
