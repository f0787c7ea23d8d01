//! Contact info admin: edit fields, save, reset, read submitted leads.

use tracing::error;

use crate::admin::confirm::{AdminAction, ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::admin::status::{
    StatusLine, BACKEND_UNREACHABLE, LOGIN_REQUIRED, MESSAGES_FAILED, RESET_FAILED, SAVED,
    SAVE_FAILED,
};
use crate::api::{ApiClient, ApiError};
use crate::contact::{ContactData, ContactField, ContactMessage};
use crate::mvi::Reducer;

const RESET_DONE: &str = "Reset successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactTab {
    #[default]
    Edit,
    Messages,
}

#[derive(Debug, Default)]
pub struct ContactEditor {
    data: ContactData,
    messages: Vec<ContactMessage>,
    tab: ContactTab,
    dialog: ConfirmDialogState,
    status: StatusLine,
}

impl ContactEditor {
    pub fn new(data: ContactData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn data(&self) -> &ContactData {
        &self.data
    }

    pub fn messages(&self) -> &[ContactMessage] {
        &self.messages
    }

    pub fn tab(&self) -> ContactTab {
        self.tab
    }

    pub fn dialog(&self) -> &ConfirmDialogState {
        &self.dialog
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub async fn load(&mut self, client: &ApiClient) {
        match client.fetch_contact().await {
            Ok(data) => self.data = data,
            Err(err) => {
                error!(error = %err, "Failed to fetch contact info");
                self.status.error(BACKEND_UNREACHABLE);
            }
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.data.set(field, value);
    }

    /// Switches tabs; the messages tab refreshes the lead list.
    pub async fn open_tab(&mut self, tab: ContactTab, client: &ApiClient) {
        self.tab = tab;
        if tab == ContactTab::Messages {
            self.load_messages(client).await;
        }
    }

    pub async fn load_messages(&mut self, client: &ApiClient) {
        match client.fetch_messages().await {
            Ok(messages) => self.messages = messages,
            Err(ApiError::Unauthenticated) => self.status.error(LOGIN_REQUIRED),
            Err(err) => {
                error!(error = %err, "Failed to fetch messages");
                self.status.error(MESSAGES_FAILED);
            }
        }
    }

    pub async fn save(&mut self, client: &ApiClient) {
        if !client.is_authenticated() {
            self.status.error(LOGIN_REQUIRED);
            return;
        }
        match client.save_contact(&self.data).await {
            Ok(()) => self.status.success(SAVED),
            Err(err) => {
                error!(error = %err, "Save error");
                self.status.error(SAVE_FAILED);
            }
        }
    }

    pub fn request_reset(&mut self, client: &ApiClient) {
        if !client.is_authenticated() {
            self.status.error(LOGIN_REQUIRED);
            return;
        }
        self.dispatch(ConfirmIntent::Request {
            action: AdminAction::ResetContact,
        });
    }

    pub fn dispatch(&mut self, intent: ConfirmIntent) {
        let state = std::mem::take(&mut self.dialog);
        self.dialog = ConfirmReducer::reduce(state, intent);
    }

    pub fn cancel(&mut self) {
        self.dispatch(ConfirmIntent::CancelClicked);
    }

    pub async fn confirm(&mut self, client: &ApiClient) {
        self.dispatch(ConfirmIntent::ConfirmClicked);
        let Some(action) = self.dialog.confirmed_action().cloned() else {
            return;
        };
        self.dispatch(ConfirmIntent::Hide);

        if action != AdminAction::ResetContact {
            return;
        }
        match client.reset_contact().await {
            Ok(data) => {
                self.data = data;
                self.status.success(RESET_DONE);
            }
            Err(err) => {
                error!(error = %err, "Failed to reset contact info");
                self.status.error(RESET_FAILED);
            }
        }
    }
}
