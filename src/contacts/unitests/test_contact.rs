use serde_json::json;
use crate::contacts::contact::{Contact, ContactBuilder, ContactInput};

#[test]
fn test_contact_builder() {
    let contact = ContactBuilder::new("42")
        .with_first_name("Ada")
        .with_last_name("Lovelace")
        .with_email("ada@example.com")
        .with_company("Analytical Engines")
        .build();

    assert_eq!(contact.id(), "42");
    assert!(contact.has_id());
    assert_eq!(contact.first_name(), "Ada");
    assert_eq!(contact.last_name(), "Lovelace");
    assert_eq!(contact.full_name(), "Ada Lovelace");
    assert_eq!(contact.email(), Some("ada@example.com"));
    assert_eq!(contact.phone(), None);
    assert_eq!(contact.company(), Some("Analytical Engines"));
    assert_eq!(contact.image(), None);
}

#[test]
fn test_contact_without_id() {
    let contact = ContactBuilder::new("").with_first_name("Ada").build();
    assert!(!contact.has_id());
    assert!(contact.to_string().starts_with("- Ada"));
}

#[test]
fn test_input_serialization() {
    let input = ContactInput {
        first_name  : "Ada".into(),
        last_name   : "Lovelace".into(),
        email       : Some("ada@example.com".into()),
        phone       : None,
        company     : Some("".into()),
        image       : None,
    };

    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value, json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "company": ""
    }));
}

#[test]
fn test_contact_serialization() {
    let contact = ContactBuilder::new("7").with_first_name("Ada").with_last_name("L").build();
    let value = serde_json::to_value(&contact).unwrap();
    assert_eq!(value["id"], "7");
    assert_eq!(value["firstName"], "Ada");
    assert!(value["email"].is_null());

    let back: Contact = serde_json::from_value(value).unwrap();
    assert_eq!(back, contact);
}

#[test]
fn test_to_input() {
    let contact = ContactBuilder::new("7")
        .with_first_name("Ada")
        .with_last_name("Lovelace")
        .with_image("https://img.example.com/ada.png")
        .build();

    let input = contact.to_input();
    assert_eq!(Contact::new("7", input), contact);
}
