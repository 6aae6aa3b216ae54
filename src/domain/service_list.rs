//! Semicolon-delimited codec for pharmacy service tags.
//!
//! Pharmacy records persist their services as a single string field with
//! tags joined by `;`. This module converts between that storage form and
//! an ordered in-memory list, validates tags against the fixed vocabulary,
//! and renders the compact display string used by directory cards.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Delimiter used to join service tags into the persisted string.
///
/// There is no escaping: a tag containing `;` cannot round-trip.
pub const SERVICE_DELIMITER: char = ';';

/// Placeholder shown when a pharmacy has no services recorded.
pub const NO_SERVICES_PLACEHOLDER: &str = "Aucun service renseigné";

/// Default number of tags shown before truncating to "et N autre(s)".
pub const DEFAULT_MAX_DISPLAY: usize = 3;

/// The closed vocabulary of pharmacy service names.
pub static SERVICE_VOCABULARY: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Garde de nuit",
        "Vaccinations",
        "Livraison à domicile",
        "Test de glycémie",
        "Mesure de tension",
        "Conseil pharmaceutique",
        "Matériel médical",
        "Orthopédie",
        "Homéopathie",
        "Parapharmacie",
        "Préparations magistrales",
    ]
    .into_iter()
    .collect()
});

/// Result of validating a list of service tags against a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceValidation {
    /// True iff every tag belongs to the vocabulary.
    pub is_valid: bool,

    /// The tags not found in the vocabulary, in input order.
    pub invalid: Vec<String>,
}

/// Decode a persisted delimited string into an ordered list of tags.
///
/// Returns an empty list for `None`, empty, or whitespace-only input.
/// Segments are trimmed; segments that trim to empty are dropped.
pub fn decode(raw: Option<&str>) -> Vec<String> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Vec::new(),
    };

    raw.split(SERVICE_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Encode a list of tags into the persisted delimited string.
///
/// Items are trimmed; empty or whitespace-only items are dropped. Returns
/// an empty string for an empty or all-empty list.
pub fn encode<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(&SERVICE_DELIMITER.to_string())
}

/// Check every tag against a vocabulary, collecting the unknown ones.
pub fn validate<S: AsRef<str>>(items: &[S], vocabulary: &HashSet<&str>) -> ServiceValidation {
    let invalid: Vec<String> = items
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| !vocabulary.contains(item))
        .map(str::to_string)
        .collect();

    ServiceValidation {
        is_valid: invalid.is_empty(),
        invalid,
    }
}

/// Render the compact display string used by pharmacy cards.
///
/// Shows up to `max_display` tags joined by `", "`; the overflow is
/// summarized as `" et N autre(s)"` with the correct French plural.
pub fn format_for_display<S: AsRef<str>>(items: &[S], max_display: usize) -> String {
    if items.is_empty() {
        return NO_SERVICES_PLACEHOLDER.to_string();
    }

    let shown: Vec<&str> = items
        .iter()
        .take(max_display)
        .map(|item| item.as_ref())
        .collect();
    let joined = shown.join(", ");

    let hidden = items.len().saturating_sub(max_display);
    match hidden {
        0 => joined,
        1 => format!("{} et 1 autre", joined),
        n => format!("{} et {} autres", joined, n),
    }
}
