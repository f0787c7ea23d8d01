//! Contact modal content and the lead form.

mod lead;
mod types;

pub use lead::{
    failure_message, submit_lead, LeadError, LeadField, LeadForm, Notification, NotificationKind,
    NotificationSlot, CLOSE_AFTER_SENT, LEAD_SENT, NOTIFICATION_TTL,
};
pub use types::{ContactData, ContactField, ContactMessage};
