use super::contact::Contact;

/// Records whose first name, last name, email, phone or company contain
/// `query`, ignoring case. Absent and empty fields are skipped. A blank query
/// keeps every record; order is always preserved.
pub fn filter<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return contacts.iter().collect();
    }

    contacts.iter()
        .filter(|c| haystack(c).contains(&query))
        .collect()
}

fn haystack(contact: &Contact) -> String {
    [
        Some(contact.first_name()),
        Some(contact.last_name()),
        contact.email(),
        contact.phone(),
        contact.company(),
    ]
    .into_iter()
    .flatten()
    .filter(|v| !v.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}
