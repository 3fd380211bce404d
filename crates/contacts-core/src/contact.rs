//! The contact record.

use serde::{Deserialize, Serialize};

use crate::id::ContactId;

/// A single contact entry.
///
/// `name` is free-form display text. `email` is unique among live contacts;
/// the registry enforces that, not this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Identifier assigned by the registry at creation.
    pub id: ContactId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl Contact {
    pub(crate) fn new(id: ContactId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Contact {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
