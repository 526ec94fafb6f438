//! Error types for the contact book.
//!
//! Validation failures of contact fields live in
//! [`crate::domain::ValidationError`]; this module holds the errors of the
//! surrounding application.

use thiserror::Error;

pub use crate::domain::ValidationError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
            reason: "Must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACT_BOOK_PAGE_SIZE: Must be at least 1"
        );

        let err = ConfigError::DotenvError("line 3".to_string());
        assert_eq!(err.to_string(), "Failed to load .env file: line 3");
    }
}
