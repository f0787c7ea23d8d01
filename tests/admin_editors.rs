//! Category and contact editors end to end against the mock backend.

mod common;

use common::client;
use common::mock_backend::{MockBackend, MockResponse};
use serde_json::json;
use storefront::admin::{
    AdminAction, CategoryDraft, CategoryEditor, ConfirmDialogState, ContactEditor, ContactTab,
    StatusKind, LOGIN_REQUIRED, SAVED, SAVE_FAILED,
};
use storefront::catalog::{default_categories, CategoryIcon};
use storefront::contact::{ContactData, ContactField};

fn status_message(kind: StatusKind, message: &str) -> Option<(StatusKind, String)> {
    Some((kind, message.to_string()))
}

fn current(editor: &CategoryEditor) -> Option<(StatusKind, String)> {
    editor
        .status()
        .current()
        .map(|s| (s.kind, s.message.clone()))
}

#[tokio::test]
async fn delete_then_save_sends_remaining_items() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::default()).await;
    let client = client(&backend.base_url(), Some("tok"));

    let mut editor = CategoryEditor::new(default_categories());
    assert!(editor.request_delete("vehicles"));
    assert_eq!(
        editor.dialog().pending_action(),
        Some(&AdminAction::DeleteCategory {
            id: "vehicles".into()
        })
    );

    editor.confirm(&client).await;
    assert_eq!(editor.dialog(), &ConfirmDialogState::Hidden);
    assert!(
        backend.captured_requests().await.is_empty(),
        "delete is local until saved"
    );

    editor.save(&client).await;
    assert_eq!(current(&editor), status_message(StatusKind::Success, SAVED));

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    let ids: Vec<_> = requests[0].json()["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["art", "puzzles"]);
}

#[tokio::test]
async fn cancelled_delete_keeps_everything() {
    let backend = MockBackend::start().await;
    let client = client(&backend.base_url(), Some("tok"));

    let mut editor = CategoryEditor::new(default_categories());
    editor.request_delete("art");
    editor.cancel();
    editor.confirm(&client).await;

    assert_eq!(editor.items().len(), 3);
    assert!(backend.captured_requests().await.is_empty());
}

#[tokio::test]
async fn save_without_token_reports_login_required() {
    let backend = MockBackend::start().await;
    let client = client(&backend.base_url(), None);

    let mut editor = CategoryEditor::new(default_categories());
    editor.save(&client).await;

    assert_eq!(
        current(&editor),
        status_message(StatusKind::Error, LOGIN_REQUIRED)
    );
    assert!(backend.captured_requests().await.is_empty());
}

#[tokio::test]
async fn failed_save_reports_error_and_keeps_items() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(500, "boom"))
        .await;
    let client = client(&backend.base_url(), Some("tok"));

    let mut editor = CategoryEditor::new(default_categories());
    editor
        .add(CategoryDraft {
            id: "Water Toys".into(),
            title: "Water Toys".into(),
            img: "/w.png".into(),
            icon: CategoryIcon::Zap,
            ..CategoryDraft::default()
        })
        .unwrap();
    editor.save(&client).await;

    assert_eq!(
        current(&editor),
        status_message(StatusKind::Error, SAVE_FAILED)
    );
    assert_eq!(editor.items().len(), 4);
    assert_eq!(editor.items()[3].id, "water-toys");
}

#[tokio::test]
async fn reset_replaces_items_after_confirmation() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!([{ "id": "fresh", "title": "Fresh" }])))
        .await;
    let client = client(&backend.base_url(), Some("tok"));

    let mut editor = CategoryEditor::new(Vec::new());
    editor.request_reset(&client);
    assert!(editor.dialog().is_visible());
    assert!(backend.captured_requests().await.is_empty());

    editor.confirm(&client).await;

    assert_eq!(editor.items().len(), 1);
    assert_eq!(editor.items()[0].id, "fresh");
    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/shopbycategory/reset");
    assert_eq!(
        editor.status().current().map(|s| s.kind),
        Some(StatusKind::Success)
    );
}

#[tokio::test]
async fn preview_reflects_unsaved_edits_without_autoplay() {
    let mut editor = CategoryEditor::new(default_categories());
    editor.request_delete("puzzles");
    let backend = MockBackend::start().await;
    editor.confirm(&client(&backend.base_url(), None)).await;

    let preview = editor.preview();
    assert_eq!(preview.len(), 2);
    assert!(!preview.is_auto_playing());
}

#[tokio::test]
async fn contact_edit_and_save() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!({
            "title": "Visit Us",
            "email": "hi@toys.in",
            "hoursSunday": "Closed"
        })))
        .await;
    backend.enqueue_response(MockResponse::default()).await;
    let client = client(&backend.base_url(), Some("tok"));

    let mut editor = ContactEditor::default();
    editor.load(&client).await;
    assert_eq!(editor.data().title, "Visit Us");
    assert_eq!(editor.data().phone, "");

    editor.set(ContactField::Phone, "+91 11111 22222");
    editor.save(&client).await;

    let requests = backend.captured_requests().await;
    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[1].path, "/api/contact");
    assert_eq!(requests[1].json()["phone"], "+91 11111 22222");
    assert_eq!(requests[1].json()["hoursSunday"], "Closed");
}

#[tokio::test]
async fn contact_reset_after_confirmation() {
    let backend = MockBackend::start().await;
    let defaults = ContactData::default();
    backend
        .enqueue_response(MockResponse::data(serde_json::to_value(&defaults).unwrap()))
        .await;
    let client = client(&backend.base_url(), Some("tok"));

    let mut data = ContactData::default();
    data.title = "Edited".into();
    let mut editor = ContactEditor::new(data);
    editor.request_reset(&client);
    assert_eq!(
        editor.dialog().pending_action(),
        Some(&AdminAction::ResetContact)
    );
    editor.confirm(&client).await;

    assert_eq!(editor.data(), &defaults);
    assert_eq!(
        backend.captured_requests().await[0].path,
        "/api/contact/reset"
    );
}

#[tokio::test]
async fn messages_tab_lists_leads() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!([{
            "_id": "m1",
            "name": "Asha",
            "email": "asha@example.com",
            "message": "Bulk order",
            "createdAt": "2024-05-02T10:00:00.000Z"
        }])))
        .await;
    let client = client(&backend.base_url(), Some("tok"));

    let mut editor = ContactEditor::default();
    editor.open_tab(ContactTab::Messages, &client).await;

    assert_eq!(editor.messages().len(), 1);
    assert_eq!(editor.messages()[0].created_date(), "2024-05-02");
    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].header("authorization"), Some("Bearer tok"));
}
