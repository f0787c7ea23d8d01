//! Lead form submission and its notification.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{client, dead_url};
use storefront::contact::{submit_lead, LeadForm, LEAD_SENT};

fn form() -> LeadForm {
    LeadForm {
        name: "Meera".into(),
        email: "meera@example.com".into(),
        phone: String::new(),
        message: "Do you ship to Pune?".into(),
    }
}

#[tokio::test]
async fn successful_submit_clears_the_form() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::default()).await;

    let mut form = form();
    let notification = submit_lead(&client(&backend.base_url(), None), &mut form).await;

    assert!(notification.is_success());
    assert_eq!(notification.message, LEAD_SENT);
    assert_eq!(form, LeadForm::default());
}

#[tokio::test]
async fn invalid_form_is_not_sent() {
    let backend = MockBackend::start().await;

    let mut form = form();
    form.email = "meera-at-example".into();
    let notification = submit_lead(&client(&backend.base_url(), None), &mut form).await;

    assert!(!notification.is_success());
    assert!(backend.captured_requests().await.is_empty());
    assert_eq!(form.email, "meera-at-example");
}

#[tokio::test]
async fn server_rejection_keeps_input_and_shows_message() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(400, "Message too short"))
        .await;

    let mut form = form();
    let notification = submit_lead(&client(&backend.base_url(), None), &mut form).await;

    assert!(!notification.is_success());
    assert_eq!(notification.message, "Message too short");
    assert_eq!(form.name, "Meera");
}

#[tokio::test]
async fn unreachable_backend_reports_connection_failure() {
    let mut form = form();
    let notification = submit_lead(&client(&dead_url(), None), &mut form).await;
    assert!(!notification.is_success());
    assert_eq!(notification.message, "Failed to connect to server.");
}
