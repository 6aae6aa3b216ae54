//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// One or more service tags are not part of the known vocabulary.
    UnknownServices(Vec<String>),

    /// The provided URL is invalid.
    InvalidUrl(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number (must contain only digits): {}", phone)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::UnknownServices(services) => {
                write!(f, "Unknown services: {}", services.join(", "))
            }
            Self::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
        }
    }
}

impl std::error::Error for ValidationError {}
