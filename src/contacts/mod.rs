pub mod contact;
pub mod validators;
pub mod normalizer;
pub mod api_client;
pub mod search;
pub mod form;

pub mod notification;
pub mod confirmer;
pub mod page_listener;
pub mod page_controller;

pub use {
    contact::{Contact, ContactInput, ContactBuilder},
    validators::{Field, Violation, FormErrors},
    api_client::{ApiClient, ContactsApi},
    form::ContactForm,
    notification::{Notification, Severity},
    confirmer::{Confirmer, ConfirmPrompt, AlwaysConfirm},
    page_listener::PageListener,
    page_controller::{PageController, PageState, Mode, LoadTicket, SubmitOutcome},
};
