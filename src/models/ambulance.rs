//! Ambulance model for the directory.

use serde::{Deserialize, Serialize};

/// An ambulance service listed in the MEDDoC directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Ambulance {
    /// Unique identifier assigned by the record store
    pub id: i64,

    /// Operator name
    pub name: String,

    /// Dispatch phone in canonical `+261...` form
    pub phone: String,

    /// Base address
    pub address: String,

    /// Free-form description (coverage area, equipment)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the service currently accepts calls
    #[serde(default)]
    pub available: bool,

    /// When the record was created (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// When the record was last updated (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Insert payload for a new ambulance record.
#[derive(Debug, Clone, Serialize)]
pub struct NewAmbulance {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub available: bool,
}

impl From<&Ambulance> for NewAmbulance {
    fn from(ambulance: &Ambulance) -> Self {
        Self {
            name: ambulance.name.clone(),
            phone: ambulance.phone.clone(),
            address: ambulance.address.clone(),
            description: ambulance.description.clone(),
            available: ambulance.available,
        }
    }
}

/// Partial change set for updating an ambulance record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AmbulanceChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}
