//! Facility availability checks for a chosen station pair.
//!
//! Every failing facility at both ends is collected with `Validation`, so
//! the caller can tell whether the origin, the destination or both are
//! blocked.

use crate::catalog::{FacilityStatus, Station};
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

pub type FacilityCheck = Validation<(), NonEmptyVec<FacilityViolation>>;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TripEnd {
    Origin,
    Destination,
}

impl fmt::Display for TripEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => f.write_str("origin"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Facility {
    Locker,
    Shower,
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locker => f.write_str("locker"),
            Self::Shower => f.write_str("shower"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FacilityViolation {
    #[error("{end} station '{station}' has no {facility} available")]
    Unavailable {
        end: TripEnd,
        station: String,
        facility: Facility,
    },
}

impl FacilityViolation {
    pub fn end(&self) -> TripEnd {
        match self {
            Self::Unavailable { end, .. } => *end,
        }
    }
}

fn check_facility(
    end: TripEnd,
    station: &Station,
    facility: Facility,
    status: FacilityStatus,
) -> FacilityCheck {
    if status.is_usable() {
        Validation::success(())
    } else {
        Validation::fail(FacilityViolation::Unavailable {
            end,
            station: station.name.clone(),
            facility,
        })
    }
}

/// Check both facilities of one end of the trip.
pub fn check_station(end: TripEnd, station: &Station) -> FacilityCheck {
    let checks = vec![
        check_facility(end, station, Facility::Locker, station.locker),
        check_facility(end, station, Facility::Shower, station.shower),
    ];
    Validation::all_vec(checks).map(|_| ())
}

/// Check origin and destination together, accumulating every violation.
pub fn check_pair(origin: &Station, destination: &Station) -> FacilityCheck {
    let checks = vec![
        check_station(TripEnd::Origin, origin),
        check_station(TripEnd::Destination, destination),
    ];
    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FacilityStatus::*;

    #[test]
    fn usable_pair_passes() {
        let origin = Station::new("東京", Available, Partial);
        let destination = Station::new("渋谷", Partial, Available);

        assert!(check_pair(&origin, &destination).is_success());
    }

    #[test]
    fn collects_violations_from_both_ends() {
        let origin = Station::new("新宿", Unavailable, Unavailable);
        let destination = Station::new("上野", Available, Unavailable);

        match check_pair(&origin, &destination) {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 3);
                assert_eq!(
                    violations
                        .iter()
                        .filter(|v| v.end() == TripEnd::Origin)
                        .count(),
                    2
                );
                assert!(violations.iter().any(|v| *v
                    == FacilityViolation::Unavailable {
                        end: TripEnd::Destination,
                        station: "上野".to_string(),
                        facility: Facility::Shower,
                    }));
            }
            Validation::Success(_) => panic!("Expected violations, got success"),
        }
    }

    #[test]
    fn single_station_check_names_facility() {
        let station = Station::new("新宿", Unavailable, Available);

        match check_station(TripEnd::Origin, &station) {
            Validation::Failure(violations) => {
                let messages: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                assert_eq!(
                    messages,
                    vec!["origin station '新宿' has no locker available".to_string()]
                );
            }
            Validation::Success(_) => panic!("Expected a locker violation"),
        }
    }
}
