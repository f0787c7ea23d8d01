//! The "send us a message" form in the contact modal.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::api::{ApiClient, ApiError};
use crate::mvi::Timed;

/// How long a lead notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// The contact modal closes itself this long after a lead was sent.
pub const CLOSE_AFTER_SENT: Duration = Duration::from_secs(3);

pub const LEAD_SENT: &str = "Message sent successfully!";
const LEAD_REJECTED: &str = "Failed to send message.";
const LEAD_UNREACHABLE: &str = "Failed to connect to server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    Message,
}

impl LeadField {
    pub const ALL: [LeadField; 4] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::Phone,
        LeadField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadField::Name => "Name",
            LeadField::Email => "Email",
            LeadField::Phone => "Phone",
            LeadField::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, LeadField::Phone)
    }

    /// Next field in tab order, wrapping at the end.
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadError {
    #[error("{} is required", .0.label())]
    Missing(LeadField),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Body of `POST /contact/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl LeadForm {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: LeadField) -> &mut String {
        match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
            LeadField::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), LeadError> {
        if let Some(field) = LeadField::ALL
            .into_iter()
            .find(|f| f.is_required() && self.get(*f).trim().is_empty())
        {
            return Err(LeadError::Missing(field));
        }

        let email = self.email.trim();
        let valid = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !valid {
            return Err(LeadError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

pub type NotificationSlot = Timed<Notification>;

/// User-facing text for a failed submission.
pub fn failure_message(err: &ApiError) -> String {
    if let Some(message) = err.server_message() {
        return message.to_string();
    }
    match err {
        ApiError::Rejected { .. } => LEAD_REJECTED.to_string(),
        _ => LEAD_UNREACHABLE.to_string(),
    }
}

/// Validates and posts the form. The form is cleared only on success.
pub async fn submit_lead(client: &ApiClient, form: &mut LeadForm) -> Notification {
    if let Err(err) = form.validate() {
        return Notification::error(err.to_string());
    }

    match client.submit_message(form).await {
        Ok(_) => {
            form.clear();
            Notification::success(LEAD_SENT)
        }
        Err(err) => {
            warn!(error = %err, kind = err.kind(), "lead submission failed");
            Notification::error(failure_message(&err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        LeadForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: String::new(),
            message: "Bulk order for 300 units".into(),
        }
    }

    #[test]
    fn phone_is_optional() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn required_fields_reported_in_order() {
        let mut form = filled();
        form.message = "  ".into();
        assert_eq!(form.validate(), Err(LeadError::Missing(LeadField::Message)));
        form.name.clear();
        assert_eq!(form.validate(), Err(LeadError::Missing(LeadField::Name)));
        assert_eq!(
            LeadError::Missing(LeadField::Name).to_string(),
            "Name is required"
        );
    }

    #[test]
    fn rejects_malformed_email() {
        let mut form = filled();
        form.email = "asha.example.com".into();
        assert!(matches!(form.validate(), Err(LeadError::InvalidEmail(_))));
    }

    #[test]
    fn failure_messages() {
        let err = ApiError::Rejected {
            message: "Email already used".into(),
        };
        assert_eq!(failure_message(&err), "Email already used");
        let err = ApiError::Rejected {
            message: String::new(),
        };
        assert_eq!(failure_message(&err), "Failed to send message.");
        let err = ApiError::Status {
            status: 502,
            message: String::new(),
        };
        assert_eq!(failure_message(&err), "Failed to connect to server.");
    }

    #[test]
    fn tab_order_wraps() {
        assert_eq!(LeadField::Name.next(), LeadField::Email);
        assert_eq!(LeadField::Message.next(), LeadField::Name);
    }

    #[test]
    fn newer_notification_survives_old_timer() {
        let mut slot = NotificationSlot::default();
        let stale = slot.show(Notification::error("Failed to connect to server."));
        slot.show(Notification::success(LEAD_SENT));
        slot.expire(stale);
        assert!(slot.current().is_some_and(Notification::is_success));
    }
}
