//! State for the confirm dialog.

use crate::mvi::UiState;

/// A destructive admin operation waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    DeleteCategory { id: String },
    ResetCategories,
    ResetContact,
}

impl AdminAction {
    pub fn title(&self) -> &'static str {
        match self {
            AdminAction::DeleteCategory { .. } => "Delete Category",
            AdminAction::ResetCategories | AdminAction::ResetContact => "Reset Configuration",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AdminAction::DeleteCategory { .. } => {
                "Are you sure you want to remove this category? You must save changes to apply this deletion to the database."
            }
            AdminAction::ResetCategories => {
                "Are you sure you want to restore the default categories? This will overwrite your current changes."
            }
            AdminAction::ResetContact => {
                "Are you sure you want to restore the default contact settings? This will overwrite your current changes."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,

    Open {
        title: String,
        message: String,
        action: AdminAction,
        /// 0 = Confirm, 1 = Cancel.
        selected_button: u8,
    },

    /// The user confirmed; the owner takes the action and hides the dialog.
    Confirmed { action: AdminAction },
}

impl UiState for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn pending_action(&self) -> Option<&AdminAction> {
        match self {
            Self::Open { action, .. } => Some(action),
            _ => None,
        }
    }

    pub fn confirmed_action(&self) -> Option<&AdminAction> {
        match self {
            Self::Confirmed { action } => Some(action),
            _ => None,
        }
    }

    pub fn selected_button(&self) -> u8 {
        match self {
            Self::Open {
                selected_button, ..
            } => *selected_button,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(ConfirmDialogState::default(), ConfirmDialogState::Hidden);
        assert!(!ConfirmDialogState::Hidden.is_visible());
    }

    #[test]
    fn confirmed_is_not_visible() {
        let state = ConfirmDialogState::Confirmed {
            action: AdminAction::ResetContact,
        };
        assert!(!state.is_visible());
        assert_eq!(state.confirmed_action(), Some(&AdminAction::ResetContact));
        assert_eq!(state.pending_action(), None);
    }

    #[test]
    fn titles() {
        assert_eq!(
            AdminAction::DeleteCategory { id: "x".into() }.title(),
            "Delete Category"
        );
        assert_eq!(AdminAction::ResetCategories.title(), "Reset Configuration");
    }
}
