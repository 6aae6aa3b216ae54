//! Site information and social-media link models.

use serde::{Deserialize, Serialize};

/// The singleton record describing the organization itself.
///
/// Exactly one row exists in the store; updates are partial change sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SiteInfo {
    /// Unique identifier assigned by the record store
    pub id: i64,

    /// Organization name
    pub name: String,

    /// Tagline shown under the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,

    /// About text for the landing page
    pub about: String,

    /// Postal address
    pub address: String,

    /// Main phone in canonical `+261...` form
    pub phone: String,

    /// Main contact email
    pub email: String,

    /// Opening hours, free form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
}

/// Partial change set for updating the site information.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteInfoChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
}

/// A social-media link shown in the site footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SocialLink {
    /// Unique identifier assigned by the record store
    pub id: i64,

    /// Platform label (e.g. "facebook", "linkedin")
    pub platform: String,

    /// Full profile URL
    pub url: String,

    /// Icon name used by the frontend, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Insert payload for a new social link.
#[derive(Debug, Clone, Serialize)]
pub struct NewSocialLink {
    pub platform: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl From<&SocialLink> for NewSocialLink {
    fn from(link: &SocialLink) -> Self {
        Self {
            platform: link.platform.clone(),
            url: link.url.clone(),
            icon: link.icon.clone(),
        }
    }
}
