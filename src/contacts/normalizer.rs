use serde_json::Value;

use crate::Error;
use super::contact::{Contact, ContactInput};

const ENVELOPE_KEYS: [&str; 3] = ["data", "contacts", "items"];
const UNKNOWN_ERROR: &str = "Unknown error";

/// Finds the record sequence in a list response and projects every element
/// into a [`Contact`]. The bare array wins, then the envelope keys in order.
/// Anything else yields an empty list.
pub fn normalize_list(value: &Value) -> Vec<Contact> {
    let rows = match value {
        Value::Array(rows) => Some(rows),
        Value::Object(map) => ENVELOPE_KEYS.iter()
            .filter_map(|key| map.get(*key))
            .find(|v| !v.is_null())
            .and_then(|v| v.as_array()),
        _ => None,
    };

    rows.map(|rows| rows.iter().map(normalize_contact).collect())
        .unwrap_or_default()
}

pub fn normalize_contact(value: &Value) -> Contact {
    let input = ContactInput {
        first_name  : string_field(value, "firstName").unwrap_or_default(),
        last_name   : string_field(value, "lastName").unwrap_or_default(),
        email       : string_field(value, "email"),
        phone       : string_field(value, "phone"),
        company     : string_field(value, "company"),
        image       : string_field(value, "image"),
    };

    let id = string_field(value, "id").unwrap_or_default();
    Contact::new(&id, input)
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar_to_string)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(v) => Some(v.clone()),
        Value::Number(v) => Some(v.to_string()),
        Value::Bool(v) => Some(v.to_string()),
        other => Some(other.to_string()),
    }
}

/// Pulls a human-readable message out of an error response body: `message`
/// first, then `error`. Non-string values are rendered as compact JSON.
pub fn error_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    ["message", "error"].iter()
        .filter_map(|key| value.get(*key))
        .filter_map(|v| match v {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
        .next()
}

/// Text suitable for a notification detail.
pub fn readable_error(err: &Error) -> String {
    match err {
        Error::Http { message: Some(msg), .. } if !msg.is_empty() => msg.clone(),
        _ => {
            let msg = err.to_string();
            match msg.is_empty() {
                true => UNKNOWN_ERROR.to_string(),
                false => msg
            }
        }
    }
}
