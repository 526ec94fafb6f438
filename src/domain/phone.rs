//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+\d{2}-\d{3}-\d{3}-\d{3}$").expect("Failed to compile phone regex")
});

/// Check whether `value` is a phone number in the `+DD-DDD-DDD-DDD` format.
///
/// The match is anchored at both ends: a leading `+`, then groups of exactly
/// 2, 3, 3 and 3 ASCII digits separated by `-`. Nothing else is accepted.
///
/// ```
/// use contact_book::domain::is_valid_phone;
///
/// assert!(is_valid_phone("+11-111-111-111"));
/// assert!(!is_valid_phone("11-111-111-111"));
/// ```
pub fn is_valid_phone(value: &str) -> bool {
    // `\d` is Unicode-aware in the regex crate; restrict to ASCII digits.
    value.is_ascii() && PHONE_REGEX.is_match(value)
}

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("+38-050-123-456").unwrap();
/// assert_eq!(phone.as_str(), "+38-050-123-456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input is not `+DD-DDD-DDD-DDD`.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Phone {
    const LABEL: &'static str = "phone";

    fn value(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Phone {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("+11-111-111-111").unwrap();
        assert_eq!(phone.as_str(), "+11-111-111-111");
        assert_eq!(phone.value(), "+11-111-111-111");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(is_valid_phone("+11-111-111-111"));
        assert!(is_valid_phone("+38-050-123-456"));

        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("bad"));
        assert!(!is_valid_phone("11-111-111-111"));
        assert!(!is_valid_phone("+111-111-111-111"));
        assert!(!is_valid_phone("+11-11-111-111"));
        assert!(!is_valid_phone("+11-111-111-1111"));
        assert!(!is_valid_phone("+11 111 111 111"));
        assert!(!is_valid_phone(" +11-111-111-111"));
        assert!(!is_valid_phone("+11-111-111-111\n"));
        assert!(!is_valid_phone("+11-111-111-111x"));
        assert!(!is_valid_phone("+1a-111-111-111"));
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits match `\d` in Unicode mode
        assert!(!is_valid_phone("+١١-١١١-١١١-١١١"));
    }

    #[test]
    fn test_phone_new_rejects_invalid() {
        let err = Phone::new("bad").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("bad".to_string()));
        assert!(err.to_string().contains("+11-111-111-111"));
    }

    #[test]
    fn test_phone_try_from() {
        assert!(Phone::try_from("+11-111-111-111").is_ok());
        assert!(Phone::try_from("+11-111-111".to_string()).is_err());
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("+11-111-111-111").unwrap();
        assert_eq!(format!("{}", phone), "+11-111-111-111");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("+11-111-111-111").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+11-111-111-111\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"111-111\"");
        assert!(result.is_err());
    }
}
