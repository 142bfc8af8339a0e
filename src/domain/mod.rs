//! Domain value objects and validation.
//!
//! Type-safe wrappers for the two contact fields that carry a format
//! (phone numbers and email addresses), plus the validation errors the
//! contact form reports to the user.

pub mod email;
pub mod errors;
pub mod phone;

pub use email::EmailAddress;
pub use errors::{
    ValidationError, INVALID_EMAIL_MESSAGE, INVALID_PHONE_MESSAGE, MISSING_FIELD_NOTICE,
};
pub use phone::PhoneNumber;
