//! Guard predicates for controlling transitions.

/// Pure predicate evaluated before a transition fires.
///
/// The predicate sees a context value (`C`) describing whatever the
/// transition depends on, for example which controllers currently report a
/// valid selection.
///
/// # Example
///
/// ```rust
/// use station_booking::core::Guard;
///
/// let has_seats = Guard::new(|free: &u32| *free > 0);
///
/// assert!(has_seats.check(&2));
/// assert!(!has_seats.check(&0));
/// ```
pub struct Guard<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a deterministic, side-effect free predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> std::fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Guard(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct Form {
        name_filled: bool,
        terms_accepted: bool,
    }

    #[test]
    fn guard_checks_single_field() {
        let guard = Guard::new(|f: &Form| f.name_filled);

        assert!(guard.check(&Form {
            name_filled: true,
            terms_accepted: false,
        }));
        assert!(!guard.check(&Form {
            name_filled: false,
            terms_accepted: true,
        }));
    }

    #[test]
    fn guard_can_combine_fields() {
        let guard = Guard::new(|f: &Form| f.name_filled && f.terms_accepted);

        assert!(guard.check(&Form {
            name_filled: true,
            terms_accepted: true,
        }));
        assert!(!guard.check(&Form {
            name_filled: true,
            terms_accepted: false,
        }));
    }

    #[test]
    fn guard_is_deterministic() {
        let form = Form {
            name_filled: true,
            terms_accepted: false,
        };
        let guard = Guard::new(|f: &Form| f.terms_accepted);

        assert_eq!(guard.check(&form), guard.check(&form));
    }
}
