//! Station Booking: selection and screen-flow core for booking a
//! station-to-station locker/shower transfer slot.
//!
//! The wizard has four screens. The user picks an origin and a destination
//! station, then a date and a time slot, confirms in a modal and lands on a
//! completion screen. This crate holds the rules for those choices and
//! leaves rendering to a presentation layer that reads snapshots back.
//!
//! # Modules
//!
//! - [`catalog`]: immutable station/date/slot records and their loaders
//! - [`selection`]: origin/destination picking and facility validity
//! - [`schedule`]: date and time-slot picking
//! - [`summary`]: confirmation text for the modal
//! - [`flow`]: screen transitions, event dispatch and snapshots
//! - [`core`]: generic state, guard and history types the flow builds on
//!
//! # Example
//!
//! ```rust
//! use station_booking::catalog::{Catalog, DateId, DateOption, FacilityStatus, SlotId, SlotStatus, Station};
//! use station_booking::{BookingConfig, FlowController, Screen};
//!
//! let catalog = Catalog::new(
//!     vec![
//!         Station::new("東京", FacilityStatus::Available, FacilityStatus::Available),
//!         Station::new("品川", FacilityStatus::Partial, FacilityStatus::Available),
//!     ],
//!     vec![DateOption::new(14, "月")
//!         .default_active()
//!         .slot("10:00", SlotStatus::Available)],
//! )
//! .unwrap();
//!
//! let mut flow = FlowController::new(catalog, BookingConfig::default());
//! let tokyo = flow.catalog().station_by_name("東京").unwrap();
//! let shinagawa = flow.catalog().station_by_name("品川").unwrap();
//!
//! flow.on_station_clicked(tokyo);
//! flow.on_station_clicked(shinagawa);
//! assert_eq!(flow.on_advance_requested(), Screen::Scheduling);
//!
//! flow.on_slot_clicked(SlotId::new(DateId(0), 0));
//! assert_eq!(flow.on_advance_requested(), Screen::Confirming);
//! assert_eq!(flow.summary().unwrap().datetime, "2025年7月14日(月) 10:00");
//!
//! assert_eq!(flow.on_confirm_requested(), Screen::Done);
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod flow;
pub mod schedule;
pub mod selection;
pub mod summary;

// Re-export commonly used types
pub use catalog::{Catalog, DataProvider, DateId, SlotId, StationId};
pub use config::BookingConfig;
pub use error::BookingError;
pub use flow::{FlowController, FlowSnapshot, Screen, UiEvent};
pub use schedule::ScheduleSelection;
pub use selection::StationSelection;
pub use summary::BookingSummary;
