//! Contact model: the single record kept in the contact book.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact entry.
///
/// Contacts carry no identifier; a contact is addressed by its position in
/// the stored sequence. The serialized form has exactly the three string
/// fields `name`, `phone` and `email`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Contact {
    /// Display name
    pub name: String,

    /// Phone number, ASCII digits only
    pub phone: String,

    /// Email address
    pub email: String,
}

impl Contact {
    /// Create a new contact from its three fields.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Get the text of one field.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
        }
    }
}

/// One of the three contact columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl ContactField {
    /// All fields, in column order.
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Phone, Self::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
