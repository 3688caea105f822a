//! Station selection controller for the first screen.
//!
//! [`StationSelection`] owns the origin/destination pick state. Validity,
//! guidance and error text are derived when a click is processed and then
//! held until the next click, so swapping station data underneath the
//! controller never revalidates a selection on its own.

mod facility;
mod state;

pub use facility::{
    check_pair, check_station, Facility, FacilityCheck, FacilityViolation, TripEnd,
};
pub use state::{SelectOutcome, SelectionState};

use crate::catalog::{Catalog, Station, StationId};
use crate::error::BookingError;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use thiserror::Error;

/// Completeness prompt shown above the station list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Guidance {
    SelectOrigin,
    SelectDestination,
    Complete,
}

impl Guidance {
    pub fn text(self) -> &'static str {
        match self {
            Self::SelectOrigin => "出発駅を選択してください",
            Self::SelectDestination => "到着駅を選択してください",
            Self::Complete => "選択完了",
        }
    }
}

/// Why the current pair cannot advance to the schedule screen.
#[derive(Clone, PartialEq, Eq, Debug, Error, Serialize, Deserialize)]
pub enum SelectionIssue {
    #[error("出発駅と到着駅を選択してください。")]
    Incomplete,

    #[error("出発駅({origin})と到着駅({destination})の施設に空きがありません。")]
    BothUnavailable { origin: String, destination: String },

    #[error("出発駅({origin})の施設に空きがありません。")]
    OriginUnavailable { origin: String },

    #[error("到着駅({destination})の施設に空きがありません。")]
    DestinationUnavailable { destination: String },
}

#[derive(Clone, Debug)]
pub struct StationSelection {
    state: SelectionState,
    issue: Option<SelectionIssue>,
}

impl Default for StationSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl StationSelection {
    pub fn new() -> Self {
        Self {
            state: SelectionState::default(),
            issue: Some(SelectionIssue::Incomplete),
        }
    }

    /// Handle a click on `station` and re-derive validity against `catalog`.
    ///
    /// Fails only when `station` (or a station already held in the
    /// selection) is missing from `catalog`; the selection is left untouched
    /// in that case.
    pub fn select(
        &mut self,
        catalog: &Catalog,
        station: StationId,
    ) -> Result<SelectOutcome, BookingError> {
        if catalog.station(station).is_none() {
            return Err(BookingError::UnknownStation(station));
        }

        let (next, outcome) = self.state.click(station);
        let issue = evaluate(catalog, &next)?;

        log::debug!(
            "{station} clicked: {outcome:?} (origin={:?}, destination={:?})",
            next.origin,
            next.destination
        );

        self.state = next;
        self.issue = issue;
        Ok(outcome)
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn origin(&self) -> Option<StationId> {
        self.state.origin
    }

    pub fn destination(&self) -> Option<StationId> {
        self.state.destination
    }

    /// Both ends chosen and both facility-OK, as of the last click.
    pub fn is_valid(&self) -> bool {
        self.issue.is_none()
    }

    pub fn guidance(&self) -> Guidance {
        match (self.state.origin, self.state.destination) {
            (None, _) => Guidance::SelectOrigin,
            (Some(_), None) => Guidance::SelectDestination,
            (Some(_), Some(_)) => Guidance::Complete,
        }
    }

    pub fn guidance_text(&self) -> &'static str {
        self.guidance().text()
    }

    pub fn issue(&self) -> Option<&SelectionIssue> {
        self.issue.as_ref()
    }

    /// Empty when the selection is valid.
    pub fn error_text(&self) -> String {
        self.issue
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

fn evaluate(
    catalog: &Catalog,
    state: &SelectionState,
) -> Result<Option<SelectionIssue>, BookingError> {
    let (Some(origin_id), Some(destination_id)) = (state.origin, state.destination) else {
        return Ok(Some(SelectionIssue::Incomplete));
    };

    let origin = catalog
        .station(origin_id)
        .ok_or(BookingError::UnknownStation(origin_id))?;
    let destination = catalog
        .station(destination_id)
        .ok_or(BookingError::UnknownStation(destination_id))?;

    Ok(facility_issue(origin, destination))
}

fn facility_issue(origin: &Station, destination: &Station) -> Option<SelectionIssue> {
    match check_pair(origin, destination) {
        Validation::Success(_) => None,
        Validation::Failure(violations) => {
            for violation in violations.iter() {
                log::debug!("{violation}");
            }

            let origin_blocked = violations.iter().any(|v| v.end() == TripEnd::Origin);
            let destination_blocked = violations.iter().any(|v| v.end() == TripEnd::Destination);

            Some(match (origin_blocked, destination_blocked) {
                (true, true) => SelectionIssue::BothUnavailable {
                    origin: origin.name.clone(),
                    destination: destination.name.clone(),
                },
                (true, false) => SelectionIssue::OriginUnavailable {
                    origin: origin.name.clone(),
                },
                (false, _) => SelectionIssue::DestinationUnavailable {
                    destination: destination.name.clone(),
                },
            })
        }
    }
}
