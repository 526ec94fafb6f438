//! Domain validation errors.

use thiserror::Error;

/// Errors raised when a value object is built from malformed input.
///
/// Validation happens before anything is stored, so a value carrying one of
/// these errors never existed as a half-built instance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number does not match `+DD-DDD-DDD-DDD`.
    #[error("Invalid phone number format: {0:?}. Use '+11-111-111-111'")]
    InvalidPhone(String),

    /// The provided birthday is not a real calendar date in `YYYY-MM-DD`.
    #[error("Invalid birthday format: {0:?}. Use 'yyyy-mm-dd'")]
    InvalidBirthday(String),
}

impl ValidationError {
    /// The rejected input, verbatim.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPhone(value) | Self::InvalidBirthday(value) => value,
        }
    }
}
