use std::cell::RefCell;
use std::rc::Rc;
use axum::http::StatusCode;
use serde_json::json;
use contacts::{
    ApiClient,
    PageController,
};
use contacts::contacts::{
    AlwaysConfirm,
    Field,
    Mode,
    Notification,
    PageListener,
    SubmitOutcome,
};

use crate::backend::{fixture, Backend, Envelope};

#[derive(Default, Clone)]
struct Toasts {
    inner: Rc<RefCell<Vec<Notification>>>,
}

impl Toasts {
    fn summaries(&self) -> Vec<String> {
        self.inner.borrow().iter().map(|n| n.summary().to_string()).collect()
    }
}

impl PageListener for Toasts {
    fn on_notification(&self, notification: &Notification) {
        self.inner.borrow_mut().push(notification.clone());
    }
}

async fn page(backend: &Backend) -> (PageController<ApiClient>, Toasts) {
    let url = backend.spawn().await;
    let client = ApiClient::new(&url, Some("k-123")).unwrap();
    let toasts = Toasts::default();

    let mut page = PageController::new(client, Box::new(AlwaysConfirm));
    page.add_listener(Box::new(toasts.clone()));
    (page, toasts)
}

#[tokio::test]
async fn test_full_flow() {
    let backend = Backend::new()
        .with_api_key("k-123")
        .with_envelope(Envelope::Data)
        .with_contacts(fixture());
    let (mut page, toasts) = page(&backend).await;

    page.start().await;
    assert_eq!(page.state().contacts().len(), 3);
    assert_eq!(page.state().mode(), Mode::Idle);

    // create
    page.open_create();
    page.form_mut()
        .set_value(Field::FirstName, "Dee")
        .set_value(Field::LastName, "Fox")
        .set_value(Field::Email, "dee@example.com")
        .set_value(Field::Phone, "555-0199")
        .set_value(Field::Company, "Umbrella");
    assert_eq!(page.submit().await, SubmitOutcome::Created);
    assert_eq!(page.state().contacts().len(), 4);
    let dee = page.state().contacts()[3].clone();
    assert_eq!(dee.first_name(), "Dee");

    // edit
    assert!(page.open_edit(&dee));
    page.form_mut().set_value(Field::Company, "Initech");
    assert_eq!(page.submit().await, SubmitOutcome::Updated);
    assert_eq!(page.state().contact(dee.id()).unwrap().company(), Some("Initech"));
    assert_eq!(page.state().contacts().len(), 4);

    // search
    page.set_search_text("INITECH");
    let ids: Vec<&str> = page.filtered_contacts().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["2", dee.id()]);

    // delete
    assert!(page.confirm_delete(&dee).await);
    assert!(page.state().contact(dee.id()).is_none());

    // seed
    page.seed().await;
    assert_eq!(page.state().contacts().len(), 3);

    assert_eq!(toasts.summaries(), vec![
        "Contact created",
        "Contact updated",
        "Contact deleted",
        "Database seeded",
    ]);
}

#[tokio::test]
async fn test_failures_surface_backend_message() {
    let backend = Backend::new()
        .with_api_key("k-123")
        .with_contacts(fixture());
    let (mut page, toasts) = page(&backend).await;
    page.start().await;

    backend.fail_with(StatusCode::SERVICE_UNAVAILABLE, json!({"message": "Backend is read-only"}));

    let ann = page.state().contacts()[0].clone();
    assert!(page.open_edit(&ann));
    assert_eq!(page.submit().await, SubmitOutcome::Failed);
    assert!(page.state().is_dialog_open());

    assert!(!page.confirm_delete(&ann).await);
    page.seed().await;
    page.load().await;

    assert_eq!(page.state().contacts().len(), 3);
    assert_eq!(page.state().mode(), Mode::Idle);

    assert_eq!(toasts.summaries(), vec![
        "Save failed",
        "Delete failed",
        "Seed failed",
        "Failed to load contacts",
    ]);
    for toast in toasts.inner.borrow().iter() {
        assert!(toast.is_error());
        assert_eq!(toast.detail(), Some("Backend is read-only"));
    }

    backend.recover();
    assert_eq!(page.submit().await, SubmitOutcome::Updated);
    assert_eq!(toasts.summaries().last().map(|v| v.as_str()), Some("Contact updated"));
}
