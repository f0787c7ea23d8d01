//! Client for the storefront REST backend.
//!
//! Every endpoint answers with an [`Envelope`]; [`ApiClient`] unwraps it and
//! maps transport, HTTP and envelope failures onto [`ApiError`]. Admin
//! endpoints refuse to send anything when no bearer token is configured.

mod client;
mod endpoints;
mod envelope;
mod error;

pub use client::ApiClient;
pub use endpoints::{
    CATEGORIES_PATH, CATEGORIES_RESET_PATH, CONTACT_PATH, CONTACT_RESET_PATH, MESSAGES_PATH,
    SERVICES_PATH, TESTIMONIALS_PATH,
};
pub(crate) use envelope::null_as_default;
pub use envelope::Envelope;
pub use error::ApiError;
