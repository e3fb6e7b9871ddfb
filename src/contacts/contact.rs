use std::fmt;
use serde::{Serialize, Deserialize};

/// Canonical contact record as held by the page controller.
///
/// The id is assigned by the backend and never changes afterwards, so it
/// only has a getter. An empty id means the record came back without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    id          : String,
    first_name  : String,
    last_name   : String,

    email       : Option<String>,
    phone       : Option<String>,
    company     : Option<String>,
    image       : Option<String>,
}

impl Contact {
    pub fn new(id: &str, input: ContactInput) -> Self {
        Self {
            id          : id.to_string(),
            first_name  : input.first_name,
            last_name   : input.last_name,
            email       : input.email,
            phone       : input.phone,
            company     : input.company,
            image       : input.image,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Writable fields of this record.
    pub fn to_input(&self) -> ContactInput {
        ContactInput {
            first_name  : self.first_name.clone(),
            last_name   : self.last_name.clone(),
            email       : self.email.clone(),
            phone       : self.phone.clone(),
            company     : self.company.clone(),
            image       : self.image.clone(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}",
            if self.id.is_empty() { "-" } else { self.id.as_str() },
            self.first_name,
            self.last_name,
        )?;
        for v in [&self.email, &self.phone, &self.company].into_iter().flatten() {
            write!(f, " | {}", v)?;
        }
        Ok(())
    }
}

/// Write payload for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name  : String,
    pub last_name   : String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company     : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image       : Option<String>,
}

pub struct ContactBuilder {
    id          : String,
    input       : ContactInput,
}

impl ContactBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id      : id.to_string(),
            input   : ContactInput::default(),
        }
    }

    pub fn with_first_name(&mut self, name: &str) -> &mut Self {
        self.input.first_name = name.to_string();
        self
    }

    pub fn with_last_name(&mut self, name: &str) -> &mut Self {
        self.input.last_name = name.to_string();
        self
    }

    pub fn with_email(&mut self, email: &str) -> &mut Self {
        self.input.email = Some(email.to_string());
        self
    }

    pub fn with_phone(&mut self, phone: &str) -> &mut Self {
        self.input.phone = Some(phone.to_string());
        self
    }

    pub fn with_company(&mut self, company: &str) -> &mut Self {
        self.input.company = Some(company.to_string());
        self
    }

    pub fn with_image(&mut self, image: &str) -> &mut Self {
        self.input.image = Some(image.to_string());
        self
    }

    pub fn build(&self) -> Contact {
        Contact::new(&self.id, self.input.clone())
    }
}
