//! Draft form state: the fields being typed, their inline errors, and
//! whether the form is adding or editing.

use crate::models::Contact;
use serde::Serialize;

/// Free-text form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Draft {
    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_empty()
    }

    /// Whether at least one field is empty.
    pub fn has_missing_field(&self) -> bool {
        self.name.is_empty() || self.phone.is_empty() || self.email.is_empty()
    }

    pub(crate) fn load(&mut self, contact: &Contact) {
        self.name.clone_from(&contact.name);
        self.phone.clone_from(&contact.phone);
        self.email.clone_from(&contact.email);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Inline validation messages, one slot per validated field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl FieldErrors {
    /// Whether no inline error is currently shown.
    pub fn is_clear(&self) -> bool {
        self.phone.is_none() && self.email.is_none()
    }
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FormState {
    /// No edit target, all fields empty.
    Idle,
    /// Typing a new contact.
    ComposingNew,
    /// Editing the contact stored at `target`.
    ComposingEdit { target: usize },
}

impl FormState {
    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::ComposingEdit { .. } => "Modifier",
            Self::Idle | Self::ComposingNew => "Ajouter",
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::ComposingEdit { .. })
    }
}
