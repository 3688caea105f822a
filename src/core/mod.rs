//! Generic state machine building blocks used by the screen flow.
//!
//! - `State`: named states with a terminal marker
//! - `Guard`: pure predicates deciding whether a transition may fire
//! - `StateHistory`: immutable record of the transitions taken

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
