use super::contact::Contact;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub header      : String,
    pub message     : String,
    pub accept_label: String,
    pub reject_label: String,
}

impl ConfirmPrompt {
    pub fn delete(contact: &Contact) -> Self {
        Self {
            header      : "Delete contact?".into(),
            message     : format!("Are you sure you want to delete {}?", contact.full_name()),
            accept_label: "Delete".into(),
            reject_label: "Cancel".into(),
        }
    }
}

/// Asks the user to accept or reject a destructive action.
pub trait Confirmer {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// Accepts every prompt.
pub struct AlwaysConfirm;
impl Confirmer for AlwaysConfirm {
    fn confirm(&self, _: &ConfirmPrompt) -> bool {
        true
    }
}
