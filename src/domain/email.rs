//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Anything but `@` and the characters browsers treat as whitespace in
/// form patterns (ECMAScript `\s`). Rust's `\s` differs: it includes
/// U+0085 and excludes U+FEFF.
const EMAIL_SEGMENT: &str = r"[^\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}@]+";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{seg}@{seg}\.{seg}$", seg = EMAIL_SEGMENT))
        .expect("email pattern is a valid regex")
});

/// A type-safe wrapper for email addresses.
///
/// The check is purely syntactic: a local part, `@`, a domain, `.`, and a
/// tail, none of which may contain whitespace or `@`. It accepts plenty of
/// addresses RFC 5322 would reject (and the reverse); that shape is what
/// the form has always enforced, so keep it as is.
///
/// # Example
///
/// ```
/// use contact_book::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.into_inner(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Check the format without constructing a value.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}
