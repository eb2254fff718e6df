//! Contact model
//!
//! A single name/phone/email record plus the input rules applied before a
//! record is admitted into the book.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z0-9_]+$")
        .expect("email pattern is valid")
});

/// A contact record
///
/// Fields are fixed at construction. Identity is the name, compared
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
}

impl Contact {
    /// Create a new contact without validating any field
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Validate all fields
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }

        if !is_valid_phone(&self.phone) {
            return Err(ContactValidationError::InvalidPhone(self.phone.clone()));
        }

        if !is_valid_email(&self.email) {
            return Err(ContactValidationError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }

    /// Normalize a contact name for matching
    pub fn normalize_name(name: &str) -> String {
        name.to_lowercase()
    }

    /// Check if this contact matches a name (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> ({})", self.name, self.email, self.phone)
    }
}

/// Phone numbers are exactly ten ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Simple `local@domain.tld` check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Convert a name to title case ("john doe" -> "John Doe")
///
/// Every character following a whitespace character (or at the start) is
/// upper-cased, every other character is lower-cased. Whitespace is kept as-is.
pub fn to_title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for c in input.chars() {
        if c.is_whitespace() {
            capitalize_next = true;
            result.push(c);
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

/// Validation errors for contacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
    InvalidPhone(String),
    InvalidEmail(String),
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone '{}' (expected 10 digits)", phone)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email '{}'", email),
        }
    }
}

impl std::error::Error for ContactValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contact() {
        let contact = Contact::new("Ann", "5551234567", "ann@x.com");
        assert_eq!(contact.name(), "Ann");
        assert_eq!(contact.phone(), "5551234567");
        assert_eq!(contact.email(), "ann@x.com");
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("5551234567"));
        assert!(!is_valid_phone("555123456"));
        assert!(!is_valid_phone("55512345678"));
        assert!(!is_valid_phone("555-123-456"));
        assert!(!is_valid_phone(""));
        // Non-ASCII digits are rejected
        assert!(!is_valid_phone("５５５１２３４５６７"));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ann@x.com"));
        assert!(is_valid_email("first.last-1@mail.example.org"));
        assert!(!is_valid_email("ann.x.com"));
        assert!(!is_valid_email("ann@x"));
        assert!(!is_valid_email("ann @x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_validate() {
        assert!(Contact::new("Ann", "5551234567", "ann@x.com").validate().is_ok());

        assert_eq!(
            Contact::new("  ", "5551234567", "ann@x.com").validate(),
            Err(ContactValidationError::EmptyName)
        );
        assert!(matches!(
            Contact::new("Ann", "123", "ann@x.com").validate(),
            Err(ContactValidationError::InvalidPhone(_))
        ));
        assert!(matches!(
            Contact::new("Ann", "5551234567", "nope").validate(),
            Err(ContactValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(to_title_case("john doe"), "John Doe");
        assert_eq!(to_title_case("JOHN DOE"), "John Doe");
        assert_eq!(to_title_case("mary  ann"), "Mary  Ann");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn test_name_matching() {
        let contact = Contact::new("Ann Lee", "5551234567", "ann@x.com");
        assert!(contact.matches_name("ann lee"));
        assert!(contact.matches_name("ANN LEE"));
        assert!(!contact.matches_name("Ann"));
    }

    #[test]
    fn test_serialization() {
        let contact = Contact::new("Bob", "5559876543", "bob@y.com");
        let json = serde_json::to_string(&contact).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(contact, back);
    }
}
