//! Transition table for the screen flow.

use super::screen::Screen;
use crate::core::Guard;
use serde::{Deserialize, Serialize};

/// User action that attempts a screen change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Trigger {
    Advance,
    Cancel,
    /// Click outside the confirmation modal.
    Dismiss,
    Confirm,
}

impl Trigger {
    pub fn name(self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::Cancel => "cancel",
            Self::Dismiss => "dismiss",
            Self::Confirm => "confirm",
        }
    }
}

/// Work performed when a transition fires.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SideEffect {
    SeedSchedule,
    BuildSummary,
    DiscardSummary,
    Finalize,
}

/// Validity signals the guards read, sampled when a trigger arrives.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Gates {
    pub selection_valid: bool,
    pub schedule_valid: bool,
}

#[derive(Debug)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    pub trigger: Trigger,
    pub guard: Option<Guard<Gates>>,
    pub effect: SideEffect,
}

impl Transition {
    pub fn new(from: Screen, to: Screen, trigger: Trigger, effect: SideEffect) -> Self {
        Self {
            from,
            to,
            trigger,
            guard: None,
            effect,
        }
    }

    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Gates) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Whether this transition is the one `trigger` addresses on `current`,
    /// regardless of its guard.
    pub fn matches(&self, current: Screen, trigger: Trigger) -> bool {
        self.from == current && self.trigger == trigger
    }

    pub fn can_execute(&self, current: Screen, trigger: Trigger, gates: &Gates) -> bool {
        self.matches(current, trigger) && self.guard.as_ref().is_none_or(|g| g.check(gates))
    }
}

/// The wizard's transitions. `Done` has no outgoing edges.
pub fn booking_transitions() -> Vec<Transition> {
    vec![
        Transition::new(
            Screen::Selecting,
            Screen::Scheduling,
            Trigger::Advance,
            SideEffect::SeedSchedule,
        )
        .when(|g| g.selection_valid),
        Transition::new(
            Screen::Scheduling,
            Screen::Confirming,
            Trigger::Advance,
            SideEffect::BuildSummary,
        )
        .when(|g| g.schedule_valid),
        Transition::new(
            Screen::Confirming,
            Screen::Scheduling,
            Trigger::Cancel,
            SideEffect::DiscardSummary,
        ),
        Transition::new(
            Screen::Confirming,
            Screen::Scheduling,
            Trigger::Dismiss,
            SideEffect::DiscardSummary,
        ),
        Transition::new(
            Screen::Confirming,
            Screen::Done,
            Trigger::Confirm,
            SideEffect::Finalize,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: Gates = Gates {
        selection_valid: true,
        schedule_valid: true,
    };
    const CLOSED: Gates = Gates {
        selection_valid: false,
        schedule_valid: false,
    };

    fn find(screen: Screen, trigger: Trigger, gates: &Gates) -> Option<Screen> {
        booking_transitions()
            .into_iter()
            .find(|t| t.can_execute(screen, trigger, gates))
            .map(|t| t.to)
    }

    #[test]
    fn forward_edges_follow_their_gate() {
        assert_eq!(
            find(Screen::Selecting, Trigger::Advance, &OPEN),
            Some(Screen::Scheduling)
        );
        assert_eq!(find(Screen::Selecting, Trigger::Advance, &CLOSED), None);
        assert_eq!(
            find(Screen::Scheduling, Trigger::Advance, &OPEN),
            Some(Screen::Confirming)
        );

        let selection_only = Gates {
            selection_valid: true,
            schedule_valid: false,
        };
        assert_eq!(find(Screen::Scheduling, Trigger::Advance, &selection_only), None);
    }

    #[test]
    fn modal_exits_are_unguarded() {
        assert_eq!(
            find(Screen::Confirming, Trigger::Cancel, &CLOSED),
            Some(Screen::Scheduling)
        );
        assert_eq!(
            find(Screen::Confirming, Trigger::Dismiss, &CLOSED),
            Some(Screen::Scheduling)
        );
        assert_eq!(
            find(Screen::Confirming, Trigger::Confirm, &CLOSED),
            Some(Screen::Done)
        );
    }

    #[test]
    fn done_has_no_outgoing_edges() {
        for trigger in [
            Trigger::Advance,
            Trigger::Cancel,
            Trigger::Dismiss,
            Trigger::Confirm,
        ] {
            assert_eq!(find(Screen::Done, trigger, &OPEN), None);
        }
    }

    #[test]
    fn matches_ignores_guard() {
        let transition = Transition::new(
            Screen::Selecting,
            Screen::Scheduling,
            Trigger::Advance,
            SideEffect::SeedSchedule,
        )
        .when(|g| g.selection_valid);

        assert!(transition.matches(Screen::Selecting, Trigger::Advance));
        assert!(!transition.can_execute(Screen::Selecting, Trigger::Advance, &CLOSED));
        assert!(!transition.matches(Screen::Scheduling, Trigger::Advance));
    }
}
