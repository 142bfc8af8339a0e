//! Field validation errors.
//!
//! The `Display` output of each variant is the user-facing message shown
//! next to the form (or as a blocking notice for missing fields).

use std::fmt;

/// Blocking notice shown when a required field is left empty.
pub const MISSING_FIELD_NOTICE: &str = "Tous les champs doivent être remplis !";

/// Inline message shown next to an invalid phone number.
pub const INVALID_PHONE_MESSAGE: &str =
    "Veuillez entrer uniquement des chiffres pour le numéro de téléphone.";

/// Inline message shown next to an invalid email address.
pub const INVALID_EMAIL_MESSAGE: &str = "Veuillez entrer une adresse email valide.";

/// Errors that can occur while validating contact form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One of name, phone or email is empty.
    MissingField,

    /// The provided phone number contains something other than digits.
    InvalidPhone(String),

    /// The provided email address does not have a `local@domain.tld` shape.
    InvalidEmail(String),
}

impl ValidationError {
    /// The blocking notice to raise for this error, if any.
    ///
    /// Only missing fields interrupt the user; phone and email problems are
    /// already displayed inline as soon as the field changes.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::MissingField => Some(MISSING_FIELD_NOTICE),
            Self::InvalidPhone(_) | Self::InvalidEmail(_) => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "{}", MISSING_FIELD_NOTICE),
            Self::InvalidPhone(_) => write!(f, "{}", INVALID_PHONE_MESSAGE),
            Self::InvalidEmail(_) => write!(f, "{}", INVALID_EMAIL_MESSAGE),
        }
    }
}

impl std::error::Error for ValidationError {}
