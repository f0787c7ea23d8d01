//! Save/reset feedback shown above the admin editors.

pub const LOGIN_REQUIRED: &str = "Login required";
pub const SAVED: &str = "Saved successfully!";
pub const SAVE_FAILED: &str = "Failed to save";
pub const RESET_FAILED: &str = "Failed to reset";
pub const BACKEND_UNREACHABLE: &str = "Failed to connect to backend server.";
pub const MESSAGES_FAILED: &str = "Failed to load messages from server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl SaveStatus {
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// The status line of an editor. The latest message wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLine {
    current: Option<SaveStatus>,
}

impl StatusLine {
    pub fn current(&self) -> Option<&SaveStatus> {
        self.current.as_ref()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.current = Some(SaveStatus {
            kind: StatusKind::Success,
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Some(SaveStatus {
            kind: StatusKind::Error,
            message: message.into(),
        });
    }
}
