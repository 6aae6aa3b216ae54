//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Madagascar country calling code, without the leading `+`.
const COUNTRY_CODE: &str = "261";

/// A phone number in canonical international form.
///
/// Construction normalizes any of the usual human-entry shapes
/// (`032 65 031 58`, `0326503158`, `+261 32 65 031 58`, `26132...`)
/// into the single canonical representation `+261XXXXXXXXX` used for
/// persistence and display.
///
/// # Example
///
/// ```
/// use meddoc_directory::domain::PhoneNumber;
///
/// let phone = PhoneNumber::normalize("032 65 031 58").unwrap();
/// assert_eq!(phone.as_str(), "+261326503158");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize a free-form phone number into canonical `+261...` form.
    ///
    /// # Normalization Rules
    ///
    /// 1. Whitespace, hyphens, parentheses, and plus signs are stripped.
    /// 2. What remains must be one or more decimal digits.
    /// 3. A single leading `0` (local trunk prefix) is removed, then the
    ///    `261` country code is prepended unless already present.
    /// 4. A literal `+` is prepended.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the stripped input is
    /// empty or contains non-digit characters.
    pub fn normalize(input: impl AsRef<str>) -> Result<Self, ValidationError> {
        let input = input.as_ref();

        let cleaned: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '+'))
            .collect();

        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(input.to_string()));
        }

        let national = cleaned.strip_prefix('0').unwrap_or(&cleaned);

        let canonical = if national.starts_with(COUNTRY_CODE) {
            format!("+{}", national)
        } else {
            format!("+{}{}", COUNTRY_CODE, national)
        };

        Ok(Self(canonical))
    }

    /// Get the canonical phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the subscriber digits without the `+261` prefix.
    pub fn subscriber_digits(&self) -> &str {
        // Constructor guarantees the "+261" prefix
        &self.0[1 + COUNTRY_CODE.len()..]
    }
}

// Serde support - serialize as the canonical string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with normalization
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::normalize(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
