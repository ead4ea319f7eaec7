//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday is invalid.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number '{}' is not in range [9,15] digits", phone)
            }
            Self::InvalidBirthday(birthday) => {
                write!(f, "Birthday '{}' is not a valid ISO-8601 date", birthday)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
