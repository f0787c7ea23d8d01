//! Reducer for the confirm dialog.

use crate::mvi::Reducer;

use super::intent::ConfirmIntent;
use super::state::ConfirmDialogState;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Request { action } => ConfirmDialogState::Open {
                title: action.title().to_string(),
                message: action.message().to_string(),
                action,
                selected_button: 0,
            },

            ConfirmIntent::ToggleButton => match state {
                ConfirmDialogState::Open {
                    title,
                    message,
                    action,
                    selected_button,
                } => ConfirmDialogState::Open {
                    title,
                    message,
                    action,
                    selected_button: 1 - selected_button.min(1),
                },
                other => other,
            },

            ConfirmIntent::Submit => {
                let cancel = state.selected_button() == 1;
                let intent = if cancel {
                    ConfirmIntent::CancelClicked
                } else {
                    ConfirmIntent::ConfirmClicked
                };
                Self::reduce(state, intent)
            }

            ConfirmIntent::ConfirmClicked => match state {
                ConfirmDialogState::Open { action, .. } => ConfirmDialogState::Confirmed { action },
                other => other,
            },

            ConfirmIntent::CancelClicked => match state {
                ConfirmDialogState::Open { .. } => ConfirmDialogState::Hidden,
                other => other,
            },

            ConfirmIntent::Hide => ConfirmDialogState::Hidden,
        }
    }
}
