//! Contact form types.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Message shown when the submitted email already belongs to a contact.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists!";

/// Body of `POST /contacts`.
///
/// Missing fields read as empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// State of the creation form as rendered back to the client.
///
/// `values` pre-fills inputs; `errors` carries a message per field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub values: BTreeMap<String, String>,
    pub errors: BTreeMap<String, String>,
}

impl FormData {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the form with a submitted contact.
    pub fn with_values(mut self, name: &str, email: &str) -> Self {
        self.values.insert("name".to_string(), name.to_string());
        self.values.insert("email".to_string(), email.to_string());
        self
    }

    /// Attaches an error message to `field`.
    pub fn with_error(mut self, field: &str, message: &str) -> Self {
        self.errors.insert(field.to_string(), message.to_string());
        self
    }

    /// Submitted value for `field`, or `""`.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Error message recorded for `field`, if any.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}
