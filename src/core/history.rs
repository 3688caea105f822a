//! State transition history tracking.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Name of the event that caused the move
    pub trigger: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Record a transition happening now.
    pub fn now(from: S, to: S, trigger: impl Into<String>) -> Self {
        Self {
            from,
            to,
            trigger: trigger.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of transitions.
///
/// `record` returns a new history and leaves the receiver unchanged.
///
/// # Example
///
/// ```rust
/// use station_booking::core::{StateHistory, StateTransition};
/// use station_booking::Screen;
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(Screen::Selecting, Screen::Scheduling, "advance"))
///     .record(StateTransition::now(Screen::Scheduling, Screen::Confirming, "advance"));
///
/// assert_eq!(
///     history.get_path(),
///     vec![&Screen::Selecting, &Screen::Scheduling, &Screen::Confirming]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed: the first `from`, then every `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last transition, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// How many times `trigger` caused a transition.
    pub fn count_trigger(&self, trigger: &str) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.trigger == trigger)
            .count()
    }
}
