use crate::catalog::{DateId, SlotId, StationId};
use serde::{Deserialize, Serialize};

/// Inbound user actions, as wired by the presentation layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum UiEvent {
    StationClicked(StationId),
    DateClicked(DateId),
    SlotClicked(SlotId),
    /// The current screen's forward button.
    AdvanceRequested,
    CancelRequested,
    /// Click on the backdrop around the confirmation modal.
    BackdropClicked,
    ConfirmRequested,
}
