use std::collections::BTreeSet;

use super::{
    contact::{Contact, ContactInput},
    validators::{self, Field, FormErrors, Violation},
};

/// Field values and touched flags of the create/edit dialog.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    first_name  : String,
    last_name   : String,
    email       : String,
    phone       : String,
    company     : String,

    // carried over from the edited record, the dialog has no input for it
    image       : Option<String>,

    touched     : BTreeSet<Field>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName=> &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email    => &self.email,
            Field::Phone    => &self.phone,
            Field::Company  => &self.company,
        }
    }

    pub fn set_value(&mut self, field: Field, value: &str) -> &mut Self {
        let slot = match field {
            Field::FirstName=> &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email    => &mut self.email,
            Field::Phone    => &mut self.phone,
            Field::Company  => &mut self.company,
        };
        *slot = value.to_string();
        self.touched.insert(field);
        self
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn set_image(&mut self, image: Option<&str>) -> &mut Self {
        self.image = image.map(|v| v.to_string()).filter(|v| !v.is_empty());
        self
    }

    /// Empties every field and clears the touched flags.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fills the form from an existing record without marking anything touched.
    pub fn patch(&mut self, contact: &Contact) {
        self.first_name = contact.first_name().to_string();
        self.last_name = contact.last_name().to_string();
        self.email = contact.email().unwrap_or_default().to_string();
        self.phone = contact.phone().unwrap_or_default().to_string();
        self.company = contact.company().unwrap_or_default().to_string();
        self.image = contact.image().map(|v| v.to_string());
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn mark_all_touched(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn mark_untouched(&mut self) {
        self.touched.clear();
    }

    pub fn field_errors(&self, field: Field) -> Vec<Violation> {
        validators::validate(field, self.value(field))
    }

    pub fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        for field in Field::ALL {
            errors.put(field, self.field_errors(field));
        }
        errors
    }

    /// Errors the user should currently see, i.e. those on touched fields.
    pub fn visible_errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        for field in self.touched.iter() {
            errors.put(*field, self.field_errors(*field));
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn to_input(&self) -> ContactInput {
        ContactInput {
            first_name  : self.first_name.clone(),
            last_name   : self.last_name.clone(),
            email       : Some(self.email.clone()),
            phone       : Some(self.phone.clone()),
            company     : Some(self.company.clone()),
            image       : self.image.clone(),
        }
    }
}
