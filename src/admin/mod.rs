//! Content admin workflows: the category list and the contact info.
//!
//! Destructive operations (delete, reset) open a [`ConfirmDialogState`] and
//! only run once it is confirmed. Failures never abort the editor; they end
//! up on its [`StatusLine`].

pub mod confirm;
mod categories;
mod contact;
mod draft;
mod status;

pub use categories::CategoryEditor;
pub use confirm::{AdminAction, ConfirmDialogState, ConfirmIntent, ConfirmReducer};
pub use contact::{ContactEditor, ContactTab};
pub use draft::{slugify, CategoryDraft, DraftError};
pub use status::{
    SaveStatus, StatusKind, StatusLine, BACKEND_UNREACHABLE, LOGIN_REQUIRED, MESSAGES_FAILED,
    RESET_FAILED, SAVED, SAVE_FAILED,
};
