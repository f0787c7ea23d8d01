//! Intents for the confirm dialog.

use crate::mvi::Intent;

use super::state::AdminAction;

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    /// Ask the user to confirm `action`.
    Request { action: AdminAction },

    /// Move focus between the Confirm and Cancel buttons.
    ToggleButton,

    /// Activate whichever button has focus.
    Submit,

    ConfirmClicked,

    /// Cancel button, Escape, or a click outside the dialog.
    CancelClicked,

    /// The owner has executed (or dropped) the confirmed action.
    Hide,
}

impl Intent for ConfirmIntent {}
