
#[cfg(test)]
mod core {
    mod config;
}

#[cfg(test)]
mod contacts_api {
    mod api_client;
    mod page_controller;
}

use ::contacts::ContactInput;

// helper functions
fn create_input(first: &str, last: &str) -> ContactInput {
    ContactInput {
        first_name  : first.to_string(),
        last_name   : last.to_string(),
        email       : Some(format!("{}@example.com", first.to_lowercase())),
        phone       : Some("+1 (555) 010-0199".into()),
        company     : Some("Acme".into()),
        image       : None,
    }
}

fn main() {}
