//! Pharmacy model for the directory.

use crate::domain::{service_list, DEFAULT_MAX_DISPLAY};
use serde::{Deserialize, Serialize};

/// A pharmacy listed in the MEDDoC directory.
///
/// The `service` field is the persisted form of the pharmacy's service
/// tags: a single string with tags joined by `;`. Use [`Pharmacy::services`]
/// and [`Pharmacy::set_services`] instead of touching the raw field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Pharmacy {
    /// Unique identifier assigned by the record store
    pub id: i64,

    /// Pharmacy name
    pub name: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// Contact phone in canonical `+261...` form
    pub phone: String,

    /// Contact email, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Latitude for the map view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude for the map view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Semicolon-delimited service tags (storage form)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Whether the pharmacy is currently on the duty rotation
    #[serde(default)]
    pub on_duty: bool,

    /// When the record was created (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// When the record was last updated (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Pharmacy {
    /// Decode the persisted service field into an ordered list of tags.
    pub fn services(&self) -> Vec<String> {
        service_list::decode(self.service.as_deref())
    }

    /// Replace the service tags, storing them in encoded form.
    ///
    /// An empty (or all-blank) list clears the field.
    pub fn set_services<S: AsRef<str>>(&mut self, services: &[S]) {
        let encoded = service_list::encode(services);
        self.service = if encoded.is_empty() {
            None
        } else {
            Some(encoded)
        };
    }

    /// Compact service summary for directory cards.
    pub fn services_summary(&self) -> String {
        service_list::format_for_display(&self.services(), DEFAULT_MAX_DISPLAY)
    }
}

/// Insert payload for a new pharmacy (the store assigns id and timestamps).
#[derive(Debug, Clone, Serialize)]
pub struct NewPharmacy {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub on_duty: bool,
}

impl From<&Pharmacy> for NewPharmacy {
    fn from(pharmacy: &Pharmacy) -> Self {
        Self {
            name: pharmacy.name.clone(),
            address: pharmacy.address.clone(),
            city: pharmacy.city.clone(),
            phone: pharmacy.phone.clone(),
            email: pharmacy.email.clone(),
            latitude: pharmacy.latitude,
            longitude: pharmacy.longitude,
            service: pharmacy.service.clone(),
            on_duty: pharmacy.on_duty,
        }
    }
}

/// Partial change set for updating a pharmacy.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PharmacyChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_duty: Option<bool>,
}
