//! Read-only views handed to the presentation layer after each event.

use super::screen::Screen;
use crate::catalog::{Catalog, DateId, SlotId, StationId};
use crate::schedule::ScheduleSelection;
use crate::selection::StationSelection;
use crate::summary::BookingSummary;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StationRef {
    pub id: StationId,
    pub name: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    pub origin: Option<StationRef>,
    pub destination: Option<StationRef>,
    pub guidance_text: String,
    pub error_text: String,
    pub is_selection_valid: bool,
}

impl SelectionSnapshot {
    pub fn capture(catalog: &Catalog, selection: &StationSelection) -> Self {
        let station_ref = |id: StationId| {
            catalog.station(id).map(|s| StationRef {
                id,
                name: s.name.clone(),
            })
        };

        Self {
            origin: selection.origin().and_then(station_ref),
            destination: selection.destination().and_then(station_ref),
            guidance_text: selection.guidance_text().to_string(),
            error_text: selection.error_text(),
            is_selection_valid: selection.is_valid(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    pub date: Option<DateId>,
    pub slot: Option<SlotId>,
    pub is_schedule_valid: bool,
}

impl ScheduleSnapshot {
    pub fn capture(schedule: &ScheduleSelection) -> Self {
        Self {
            date: schedule.date(),
            slot: schedule.slot(),
            is_schedule_valid: schedule.is_valid(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSnapshot {
    pub session_id: Uuid,
    pub current_screen: Screen,
    pub selection: SelectionSnapshot,
    pub schedule: ScheduleSnapshot,
    /// Present only while the confirmation modal is open.
    pub summary: Option<BookingSummary>,
    /// Completion notice once the booking is confirmed.
    pub notice: Option<String>,
}
