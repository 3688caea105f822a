//! Station and schedule records handed over by the data provider.
//!
//! A [`Catalog`] is loaded once before the wizard starts and never changes
//! afterwards. Controllers refer to its records through the index-based
//! identifiers [`StationId`], [`DateId`] and [`SlotId`] rather than holding
//! the records themselves.

mod error;
mod provider;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{CatalogError, CatalogIssue};
pub use provider::{DataProvider, JsonCatalogProvider, StaticCatalogProvider};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Position of a station in the loaded station sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub usize);

/// Position of a date in the loaded date sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateId(pub usize);

/// A time slot, addressed by its owning date and its position within it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SlotId {
    pub date: DateId,
    pub index: usize,
}

impl SlotId {
    pub fn new(date: DateId, index: usize) -> Self {
        Self { date, index }
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "station #{}", self.0)
    }
}

impl fmt::Display for DateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "date #{}", self.0)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot #{} of date #{}", self.index, self.date.0)
    }
}

/// Availability of a station facility (locker or shower).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityStatus {
    Available,
    Partial,
    Unavailable,
}

impl FacilityStatus {
    /// `Available` and `Partial` both leave room for a booking.
    pub fn is_usable(self) -> bool {
        !matches!(self, Self::Unavailable)
    }

    /// Glyph shown on the confirmation screen.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Available => "○",
            Self::Partial => "△",
            Self::Unavailable => "×",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Unavailable,
}

impl SlotStatus {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Available)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub locker: FacilityStatus,
    pub shower: FacilityStatus,
}

impl Station {
    pub fn new(name: impl Into<String>, locker: FacilityStatus, shower: FacilityStatus) -> Self {
        Self {
            name: name.into(),
            locker,
            shower,
        }
    }

    /// True when neither the locker nor the shower is unavailable.
    pub fn is_facility_ok(&self) -> bool {
        self.locker.is_usable() && self.shower.is_usable()
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub status: SlotStatus,
}

impl TimeSlot {
    pub fn new(time: impl Into<String>, status: SlotStatus) -> Self {
        Self {
            time: time.into(),
            status,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DateOption {
    /// Day of month.
    pub day: u32,
    /// Day-of-week label as displayed, e.g. `月`.
    pub day_of_week: String,
    /// Pre-selected when the schedule screen opens.
    #[serde(default)]
    pub default_active: bool,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

impl DateOption {
    pub fn new(day: u32, day_of_week: impl Into<String>) -> Self {
        Self {
            day,
            day_of_week: day_of_week.into(),
            default_active: false,
            slots: Vec::new(),
        }
    }

    pub fn default_active(mut self) -> Self {
        self.default_active = true;
        self
    }

    pub fn slot(mut self, time: impl Into<String>, status: SlotStatus) -> Self {
        self.slots.push(TimeSlot::new(time, status));
        self
    }
}

/// Wire shape shared by JSON and binary loading; always validated through
/// [`Catalog::new`].
#[derive(Deserialize)]
struct RawCatalog {
    stations: Vec<Station>,
    #[serde(default)]
    dates: Vec<DateOption>,
}

/// Validated, immutable set of stations and dates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Catalog {
    stations: Vec<Station>,
    dates: Vec<DateOption>,
}

impl Catalog {
    /// Validate and take ownership of the provider's records.
    ///
    /// All problems are reported together in [`CatalogError::Invalid`].
    pub fn new(stations: Vec<Station>, dates: Vec<DateOption>) -> Result<Self, CatalogError> {
        let issues = validate(&stations, &dates);
        if !issues.is_empty() {
            return Err(CatalogError::Invalid { issues });
        }

        log::debug!(
            "loaded catalog with {} stations and {} dates",
            stations.len(),
            dates.len()
        );
        Ok(Self { stations, dates })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::new(raw.stations, raw.dates)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compact binary form for caching an already loaded catalog.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CatalogError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CatalogError> {
        let raw: RawCatalog = bincode::deserialize(bytes)?;
        Self::new(raw.stations, raw.dates)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn dates(&self) -> &[DateOption] {
        &self.dates
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.0)
    }

    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        (0..self.stations.len()).map(StationId)
    }

    pub fn station_by_name(&self, name: &str) -> Option<StationId> {
        self.stations
            .iter()
            .position(|s| s.name == name)
            .map(StationId)
    }

    pub fn date(&self, id: DateId) -> Option<&DateOption> {
        self.dates.get(id.0)
    }

    pub fn slot(&self, id: SlotId) -> Option<&TimeSlot> {
        self.date(id.date).and_then(|d| d.slots.get(id.index))
    }

    /// Identifiers of every slot owned by `date`, in load order.
    pub fn slot_ids(&self, date: DateId) -> impl Iterator<Item = SlotId> + '_ {
        let count = self.date(date).map_or(0, |d| d.slots.len());
        (0..count).map(move |index| SlotId::new(date, index))
    }

    /// The date marked default-active, if any.
    pub fn default_date(&self) -> Option<DateId> {
        self.dates.iter().position(|d| d.default_active).map(DateId)
    }
}

fn validate(stations: &[Station], dates: &[DateOption]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, station) in stations.iter().enumerate() {
        if station.name.trim().is_empty() {
            issues.push(CatalogIssue::EmptyStationName { index });
        } else if !seen.insert(station.name.as_str()) {
            issues.push(CatalogIssue::DuplicateStation {
                name: station.name.clone(),
            });
        }
    }

    for (index, date) in dates.iter().enumerate() {
        if !(1..=31).contains(&date.day) {
            issues.push(CatalogIssue::InvalidDay {
                index,
                day: date.day,
            });
        }
        for (slot, time_slot) in date.slots.iter().enumerate() {
            if time_slot.time.trim().is_empty() {
                issues.push(CatalogIssue::EmptyTimeLabel { date: index, slot });
            }
        }
    }

    let defaults = dates.iter().filter(|d| d.default_active).count();
    if defaults > 1 {
        issues.push(CatalogIssue::MultipleDefaultDates { count: defaults });
    }

    issues
}
