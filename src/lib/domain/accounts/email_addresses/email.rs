//! Email value object

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use EmailError::*;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]*?@[^@\s]*?\.[^@\s]*$").unwrap();
}

/// An error that can occur when parsing an email
#[derive(Debug, Error)]
pub enum EmailError {
    /// The email is empty
    #[error("email is empty")]
    EmptyEmail,

    /// The email is invalid
    #[error("email is invalid")]
    InvalidEmail,
}

/// An email, stored with the casing it was given
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parse a new email
    pub fn new(raw: &str) -> Result<Self, EmailError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(EmptyEmail);
        }

        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(InvalidEmail);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Wrap a value that has already been validated, e.g. one read back from the database
    pub fn new_unchecked(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// Compare two emails ignoring case
    pub fn eq_ignore_case(&self, other: &Email) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }

    /// The email as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_email_display() -> TestResult {
        let email = Email::new("email@example.com")?;

        assert_eq!(format!("{}", email), "email@example.com".to_string());

        Ok(())
    }

    #[test]
    fn test_empty_email_is_invalid() {
        let result = Email::new("   ");
        assert!(matches!(result, Err(EmptyEmail)));
    }

    #[test]
    fn test_email_without_at_symbol_is_invalid() {
        let result = Email::new("email");
        assert!(matches!(result, Err(InvalidEmail)));
    }

    #[test]
    fn test_email_keeps_casing() -> TestResult {
        let email = Email::new(" Email@Example.com ")?;

        assert_eq!(String::from(email), "Email@Example.com".to_string());

        Ok(())
    }

    #[test]
    fn test_eq_ignore_case() -> TestResult {
        let lower = Email::new("email@example.com")?;
        let upper = Email::new("EMAIL@EXAMPLE.COM")?;

        assert_ne!(lower, upper);
        assert!(lower.eq_ignore_case(&upper));
        assert!(!lower.eq_ignore_case(&Email::new("other@example.com")?));

        Ok(())
    }
}
