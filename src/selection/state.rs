//! Origin/destination pick state and the click rule that updates it.

use crate::catalog::StationId;
use serde::{Deserialize, Serialize};

/// Which ends of the trip are currently chosen.
///
/// Whenever both are set they name different stations.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SelectionState {
    pub origin: Option<StationId>,
    pub destination: Option<StationId>,
}

/// The branch of the click rule that fired.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SelectOutcome {
    OriginSet,
    DestinationSet,
    OriginCleared,
    DestinationCleared,
    /// A third station was clicked while both ends were set; it becomes the
    /// new origin and the destination is dropped.
    Restarted,
}

impl SelectionState {
    /// Apply a click on `station`, returning the next state.
    ///
    /// Branches are tried in priority order and exactly one fires:
    /// set origin, set destination, clear origin, clear destination, restart.
    /// Clicking the current destination while the origin is empty clears
    /// the destination rather than making it the origin as well.
    pub fn click(&self, station: StationId) -> (Self, SelectOutcome) {
        let clicked = Some(station);
        match (self.origin, self.destination) {
            (None, destination) if destination != clicked => (
                Self {
                    origin: clicked,
                    destination,
                },
                SelectOutcome::OriginSet,
            ),
            (Some(origin), None) if origin != station => (
                Self {
                    origin: Some(origin),
                    destination: clicked,
                },
                SelectOutcome::DestinationSet,
            ),
            (origin, destination) if origin == clicked => (
                Self {
                    origin: None,
                    destination,
                },
                SelectOutcome::OriginCleared,
            ),
            (origin, destination) if destination == clicked => (
                Self {
                    origin,
                    destination: None,
                },
                SelectOutcome::DestinationCleared,
            ),
            _ => (
                Self {
                    origin: clicked,
                    destination: None,
                },
                SelectOutcome::Restarted,
            ),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: StationId = StationId(0);
    const B: StationId = StationId(1);
    const C: StationId = StationId(2);

    fn clicks(ids: &[StationId]) -> SelectionState {
        ids.iter()
            .fold(SelectionState::default(), |state, id| state.click(*id).0)
    }

    #[test]
    fn first_click_sets_origin() {
        let (state, outcome) = SelectionState::default().click(A);
        assert_eq!(outcome, SelectOutcome::OriginSet);
        assert_eq!(state.origin, Some(A));
        assert_eq!(state.destination, None);
    }

    #[test]
    fn second_distinct_click_sets_destination() {
        let (state, outcome) = clicks(&[A]).click(B);
        assert_eq!(outcome, SelectOutcome::DestinationSet);
        assert_eq!(state.origin, Some(A));
        assert_eq!(state.destination, Some(B));
        assert!(state.is_complete());
    }

    #[test]
    fn clicking_origin_alone_deselects_it() {
        let (state, outcome) = clicks(&[A]).click(A);
        assert_eq!(outcome, SelectOutcome::OriginCleared);
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn clicking_origin_keeps_destination() {
        let (state, outcome) = clicks(&[A, B]).click(A);
        assert_eq!(outcome, SelectOutcome::OriginCleared);
        assert_eq!(state.origin, None);
        assert_eq!(state.destination, Some(B));
    }

    #[test]
    fn clicking_destination_deselects_it() {
        let (state, outcome) = clicks(&[A, B]).click(B);
        assert_eq!(outcome, SelectOutcome::DestinationCleared);
        assert_eq!(state.origin, Some(A));
        assert_eq!(state.destination, None);
    }

    #[test]
    fn third_station_restarts_selection() {
        let (state, outcome) = clicks(&[A, B]).click(C);
        assert_eq!(outcome, SelectOutcome::Restarted);
        assert_eq!(state.origin, Some(C));
        assert_eq!(state.destination, None);
    }

    #[test]
    fn new_origin_fills_gap_before_destination() {
        let (state, outcome) = clicks(&[A, B, A]).click(C);
        assert_eq!(outcome, SelectOutcome::OriginSet);
        assert_eq!(state.origin, Some(C));
        assert_eq!(state.destination, Some(B));
    }

    #[test]
    fn destination_never_doubles_as_origin() {
        let (state, outcome) = clicks(&[A, B, A]).click(B);
        assert_eq!(outcome, SelectOutcome::DestinationCleared);
        assert_eq!(state, SelectionState::default());
    }
}
