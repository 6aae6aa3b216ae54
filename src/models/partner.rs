//! Partner organization model.

use serde::{Deserialize, Serialize};

/// A partner organization shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Partner {
    /// Unique identifier assigned by the record store
    pub id: i64,

    /// Partner name
    pub name: String,

    /// Public URL of the partner logo
    pub logo_url: String,

    /// Partner website, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,

    /// Short description shown on the partners page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Insert payload for a new partner.
#[derive(Debug, Clone, Serialize)]
pub struct NewPartner {
    pub name: String,
    pub logo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Partner> for NewPartner {
    fn from(partner: &Partner) -> Self {
        Self {
            name: partner.name.clone(),
            logo_url: partner.logo_url.clone(),
            website_url: partner.website_url.clone(),
            description: partner.description.clone(),
        }
    }
}

/// Partial change set for updating a partner.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PartnerChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
