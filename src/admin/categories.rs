//! Shop-by-category admin: add, delete, reset, save, preview.

use tracing::{error, info, warn};

use crate::admin::confirm::{AdminAction, ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::admin::draft::{CategoryDraft, DraftError};
use crate::admin::status::{
    StatusLine, BACKEND_UNREACHABLE, LOGIN_REQUIRED, RESET_FAILED, SAVED, SAVE_FAILED,
};
use crate::api::{ApiClient, ApiError};
use crate::carousel::CarouselState;
use crate::catalog::CategoryItem;
use crate::mvi::Reducer;

const RESET_DONE: &str = "Reset to defaults successfully!";

#[derive(Debug, Default)]
pub struct CategoryEditor {
    items: Vec<CategoryItem>,
    dialog: ConfirmDialogState,
    status: StatusLine,
}

impl CategoryEditor {
    pub fn new(items: Vec<CategoryItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[CategoryItem] {
        &self.items
    }

    pub fn dialog(&self) -> &ConfirmDialogState {
        &self.dialog
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Replaces the list with what the server currently has.
    pub async fn load(&mut self, client: &ApiClient) {
        match client.fetch_categories().await {
            Ok(items) => self.items = items,
            Err(err) => {
                error!(error = %err, "Failed to fetch categories");
                self.status.error(BACKEND_UNREACHABLE);
            }
        }
    }

    /// Appends a new category. Nothing reaches the server until [`save`](Self::save).
    pub fn add(&mut self, draft: CategoryDraft) -> Result<&CategoryItem, DraftError> {
        let item = draft.build(&self.items)?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Opens the confirm dialog for removing `id`. Returns false for unknown ids.
    pub fn request_delete(&mut self, id: &str) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        self.dispatch(ConfirmIntent::Request {
            action: AdminAction::DeleteCategory { id: id.to_string() },
        });
        true
    }

    pub fn request_reset(&mut self, client: &ApiClient) {
        if !client.is_authenticated() {
            self.status.error(LOGIN_REQUIRED);
            return;
        }
        self.dispatch(ConfirmIntent::Request {
            action: AdminAction::ResetCategories,
        });
    }

    pub fn dispatch(&mut self, intent: ConfirmIntent) {
        let state = std::mem::take(&mut self.dialog);
        self.dialog = ConfirmReducer::reduce(state, intent);
    }

    pub fn cancel(&mut self) {
        self.dispatch(ConfirmIntent::CancelClicked);
    }

    /// Confirms the open dialog and runs its action.
    pub async fn confirm(&mut self, client: &ApiClient) {
        self.dispatch(ConfirmIntent::ConfirmClicked);
        self.run_confirmed(client).await;
    }

    /// Runs the action the dialog holds in its `Confirmed` state, if any.
    pub async fn run_confirmed(&mut self, client: &ApiClient) {
        let Some(action) = self.dialog.confirmed_action().cloned() else {
            return;
        };
        self.dispatch(ConfirmIntent::Hide);

        match action {
            AdminAction::DeleteCategory { id } => {
                self.items.retain(|item| item.id != id);
                info!(%id, "category removed locally");
            }
            AdminAction::ResetCategories => match client.reset_categories().await {
                Ok(items) => {
                    self.items = items;
                    self.status.success(RESET_DONE);
                }
                Err(err) => self.report(&err, RESET_FAILED),
            },
            AdminAction::ResetContact => {
                warn!("contact reset is not handled by the category editor");
            }
        }
    }

    /// Writes the whole list to the server.
    pub async fn save(&mut self, client: &ApiClient) {
        if !client.is_authenticated() {
            self.status.error(LOGIN_REQUIRED);
            return;
        }
        match client.save_categories(&self.items).await {
            Ok(()) => self.status.success(SAVED),
            Err(err) => self.report(&err, SAVE_FAILED),
        }
    }

    /// The current list as a carousel, without autoplay.
    pub fn preview(&self) -> CarouselState<CategoryItem> {
        CarouselState::without_autoplay(self.items.clone())
    }

    fn report(&mut self, err: &ApiError, message: &str) {
        error!(error = %err, kind = err.kind(), "{message}");
        match err {
            ApiError::Unauthenticated => self.status.error(LOGIN_REQUIRED),
            _ => self.status.error(message),
        }
    }
}
