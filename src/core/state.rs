//! State trait for flow states.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A state of a state machine.
///
/// States are plain values: cloneable for history tracking, comparable for
/// transition lookup and serializable so snapshots can carry them.
///
/// # Example
///
/// ```rust
/// use station_booking::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Closed,
///     Open,
///     Locked,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///             Self::Locked => "Locked",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Locked)
///     }
/// }
///
/// assert!(Door::Locked.is_final());
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and history.
    fn name(&self) -> &str;

    /// Terminal states accept no further transitions.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
