//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("phone pattern is a valid regex"));

/// A type-safe wrapper for phone numbers.
///
/// Only plain ASCII digits are accepted: no spaces, separators or leading
/// `+`. The empty string is rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0612345678").unwrap();
/// assert_eq!(phone.into_inner(), "0612345678");
/// assert!(PhoneNumber::new("06 12 34 56 78").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the text is one or
    /// more ASCII digits and nothing else.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check the format without constructing a value.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone)
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("12345").unwrap();
        assert_eq!(phone.into_inner(), "12345");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("12a45").is_err());
        assert!(PhoneNumber::new("+33612345678").is_err());
        assert!(PhoneNumber::new("06 12 34 56 78").is_err());
        assert!(PhoneNumber::new("06-12-34").is_err());
        assert!(PhoneNumber::new("12345\n").is_err());
        assert!(PhoneNumber::new("0").is_ok());
        assert!(PhoneNumber::new("0612345678").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(PhoneNumber::new("١٢٣").is_err());
    }

    #[test]
    fn test_phone_error_carries_input() {
        match PhoneNumber::new("12a45") {
            Err(ValidationError::InvalidPhone(raw)) => assert_eq!(raw, "12a45"),
            other => panic!("Expected InvalidPhone, got: {:?}", other),
        }
    }
}
