//! Screen flow controller.
//!
//! [`FlowController`] owns the catalog, both selection controllers and the
//! current [`Screen`]. The presentation layer feeds it [`UiEvent`]s and
//! reads back a [`FlowSnapshot`], either by polling [`FlowController::snapshot`]
//! or by registering an observer once at startup.
//!
//! Events are processed synchronously and one at a time. Events that do not
//! belong to the current screen, and forward requests whose guard is closed,
//! leave the state unchanged.

mod event;
mod screen;
mod snapshot;
mod transition;

pub use event::UiEvent;
pub use screen::Screen;
pub use snapshot::{FlowSnapshot, ScheduleSnapshot, SelectionSnapshot, StationRef};
pub use transition::{booking_transitions, Gates, SideEffect, Transition, Trigger};

use crate::catalog::{Catalog, CatalogError, DataProvider, DateId, SlotId, StationId};
use crate::config::BookingConfig;
use crate::core::{State, StateHistory, StateTransition};
use crate::error::BookingError;
use crate::schedule::ScheduleSelection;
use crate::selection::StationSelection;
use crate::summary::BookingSummary;
use uuid::Uuid;

/// Shown once the booking is confirmed.
pub const BOOKING_CONFIRMED: &str = "予約を確定しました！";

/// Callback notified with a fresh snapshot after every processed event.
pub type Observer = Box<dyn FnMut(&FlowSnapshot)>;

pub struct FlowController {
    session_id: Uuid,
    catalog: Catalog,
    config: BookingConfig,
    screen: Screen,
    selection: StationSelection,
    schedule: ScheduleSelection,
    summary: Option<BookingSummary>,
    transitions: Vec<Transition>,
    history: StateHistory<Screen>,
    observers: Vec<Observer>,
}

impl FlowController {
    pub fn new(catalog: Catalog, config: BookingConfig) -> Self {
        let mut schedule = ScheduleSelection::new();
        schedule.seed(&catalog);

        let session_id = Uuid::new_v4();
        log::info!("booking session {session_id} started");

        Self {
            session_id,
            catalog,
            config,
            screen: Screen::Selecting,
            selection: StationSelection::new(),
            schedule,
            summary: None,
            transitions: booking_transitions(),
            history: StateHistory::new(),
            observers: Vec::new(),
        }
    }

    /// Load the catalog from `provider` and start a session over it.
    pub fn load<P: DataProvider>(provider: &P, config: BookingConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(provider.load()?, config))
    }

    /// Register an observer. Observers are called in registration order.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&FlowSnapshot) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Process one event, returning the screen shown afterwards.
    ///
    /// Errors are precondition violations (identifiers missing from the
    /// catalog); the state is unchanged when one is returned and observers
    /// are not notified.
    pub fn try_dispatch(&mut self, event: UiEvent) -> Result<Screen, BookingError> {
        log::debug!("session {}: {event:?} on {}", self.session_id, self.screen);

        match event {
            UiEvent::StationClicked(station) if self.screen == Screen::Selecting => {
                self.selection.select(&self.catalog, station)?;
            }
            UiEvent::DateClicked(date) if self.screen == Screen::Scheduling => {
                self.schedule.select_date(&self.catalog, date)?;
            }
            UiEvent::SlotClicked(slot) if self.screen == Screen::Scheduling => {
                self.schedule.select_slot(&self.catalog, slot)?;
            }
            UiEvent::StationClicked(_) | UiEvent::DateClicked(_) | UiEvent::SlotClicked(_) => {
                log::warn!("ignoring {event:?}: not available on {}", self.screen);
            }
            UiEvent::AdvanceRequested => self.fire(Trigger::Advance)?,
            UiEvent::CancelRequested => self.fire(Trigger::Cancel)?,
            UiEvent::BackdropClicked => self.fire(Trigger::Dismiss)?,
            UiEvent::ConfirmRequested => self.fire(Trigger::Confirm)?,
        }

        self.notify();
        Ok(self.screen)
    }

    /// Process one event coming from a UI affordance.
    ///
    /// # Panics
    ///
    /// Panics if the event names a station, date or slot that was never
    /// loaded. Such events mean the presentation layer is wired wrongly.
    pub fn dispatch(&mut self, event: UiEvent) -> Screen {
        match self.try_dispatch(event) {
            Ok(screen) => screen,
            Err(err) => panic!("presentation layer sent {event:?}: {err}"),
        }
    }

    pub fn on_station_clicked(&mut self, station: StationId) -> Screen {
        self.dispatch(UiEvent::StationClicked(station))
    }

    pub fn on_date_clicked(&mut self, date: DateId) -> Screen {
        self.dispatch(UiEvent::DateClicked(date))
    }

    pub fn on_slot_clicked(&mut self, slot: SlotId) -> Screen {
        self.dispatch(UiEvent::SlotClicked(slot))
    }

    pub fn on_advance_requested(&mut self) -> Screen {
        self.dispatch(UiEvent::AdvanceRequested)
    }

    pub fn on_cancel_requested(&mut self) -> Screen {
        self.dispatch(UiEvent::CancelRequested)
    }

    pub fn on_backdrop_clicked(&mut self) -> Screen {
        self.dispatch(UiEvent::BackdropClicked)
    }

    pub fn on_confirm_requested(&mut self) -> Screen {
        self.dispatch(UiEvent::ConfirmRequested)
    }

    fn gates(&self) -> Gates {
        Gates {
            selection_valid: self.selection.is_valid(),
            schedule_valid: self.schedule.is_valid(),
        }
    }

    fn fire(&mut self, trigger: Trigger) -> Result<(), BookingError> {
        let gates = self.gates();
        let current = self.screen;

        let Some(transition) = self
            .transitions
            .iter()
            .find(|t| t.can_execute(current, trigger, &gates))
        else {
            if self.transitions.iter().any(|t| t.matches(current, trigger)) {
                log::warn!("{} on {current} held back by its guard ({gates:?})", trigger.name());
            } else {
                log::warn!("{} has no effect on {current}", trigger.name());
            }
            return Ok(());
        };
        let (to, effect) = (transition.to, transition.effect);

        match effect {
            SideEffect::SeedSchedule => self.schedule.seed(&self.catalog),
            SideEffect::BuildSummary => {
                let summary = BookingSummary::try_build(
                    &self.catalog,
                    &self.config,
                    self.selection.state(),
                    self.schedule.state(),
                )?;
                self.summary = Some(summary);
            }
            SideEffect::DiscardSummary => self.summary = None,
            SideEffect::Finalize => {
                if let Some(summary) = self.summary.take() {
                    log::info!(
                        "session {}: booked {} → {} at {}",
                        self.session_id,
                        summary.origin,
                        summary.destination,
                        summary.datetime
                    );
                }
            }
        }

        self.history = self
            .history
            .record(StateTransition::now(current, to, trigger.name()));
        self.screen = to;
        log::info!("session {}: {current} → {to}", self.session_id);
        Ok(())
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            session_id: self.session_id,
            current_screen: self.screen,
            selection: self.selection_snapshot(),
            schedule: self.schedule_snapshot(),
            summary: self.summary.clone(),
            notice: self.is_complete().then(|| BOOKING_CONFIRMED.to_string()),
        }
    }

    pub fn selection_snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot::capture(&self.catalog, &self.selection)
    }

    pub fn schedule_snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot::capture(&self.schedule)
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_complete(&self) -> bool {
        self.screen.is_final()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    pub fn selection(&self) -> &StationSelection {
        &self.selection
    }

    pub fn schedule(&self) -> &ScheduleSelection {
        &self.schedule
    }

    pub fn summary(&self) -> Option<&BookingSummary> {
        self.summary.as_ref()
    }

    pub fn history(&self) -> &StateHistory<Screen> {
        &self.history
    }
}
