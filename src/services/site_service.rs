//! Site content service layer.
//!
//! Covers the site-info singleton, social-media links, and partner
//! organizations shown on the public site.

use crate::domain::{PhoneNumber, ValidationError};
use crate::error::{StoreApiError, StoreApiResult};
use crate::models::{
    NewPartner, NewSocialLink, Partner, PartnerChanges, SiteInfo, SiteInfoChanges, SocialLink,
};
use crate::repositories::{PartnerRepository, SiteRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Parameters for updating the site information. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateSiteInfoParams {
    pub name: Option<String>,
    pub slogan: Option<String>,
    pub about: Option<String>,
    pub address: Option<String>,
    /// Free-form phone entry; canonicalized when present.
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_hours: Option<String>,
}

/// Site service trait for business operations.
#[async_trait]
pub trait SiteService: Send + Sync {
    /// Fetch the site-info singleton.
    async fn site_info(&self) -> StoreApiResult<SiteInfo>;

    /// Update the site-info singleton.
    async fn update_site_info(&self, id: i64, params: UpdateSiteInfoParams)
        -> StoreApiResult<SiteInfo>;

    /// List social links.
    async fn social_links(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<SocialLink>>;

    /// Add a social link.
    async fn add_social_link(&self, link: NewSocialLink) -> StoreApiResult<SocialLink>;

    /// Remove a social link.
    async fn remove_social_link(&self, id: i64) -> StoreApiResult<()>;

    /// List partners.
    async fn partners(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Partner>>;

    /// Add a partner.
    async fn add_partner(&self, partner: NewPartner) -> StoreApiResult<Partner>;

    /// Update a partner.
    async fn update_partner(&self, id: i64, changes: PartnerChanges) -> StoreApiResult<Partner>;

    /// Remove a partner.
    async fn remove_partner(&self, id: i64) -> StoreApiResult<()>;
}

/// Default implementation of SiteService.
pub struct SiteServiceImpl {
    site_repository: Arc<dyn SiteRepository>,
    partner_repository: Arc<dyn PartnerRepository>,
}

impl SiteServiceImpl {
    /// Create a new site service.
    pub fn new(
        site_repository: Arc<dyn SiteRepository>,
        partner_repository: Arc<dyn PartnerRepository>,
    ) -> Self {
        Self {
            site_repository,
            partner_repository,
        }
    }

    /// Validate that a URL looks like an absolute http(s) URL.
    fn check_url(url: &str) -> Result<(), ValidationError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ValidationError::InvalidUrl(url.to_string()))
        }
    }
}

#[async_trait]
impl SiteService for SiteServiceImpl {
    async fn site_info(&self) -> StoreApiResult<SiteInfo> {
        self.site_repository.get_site_info().await
    }

    async fn update_site_info(
        &self,
        id: i64,
        params: UpdateSiteInfoParams,
    ) -> StoreApiResult<SiteInfo> {
        let phone = match params.phone {
            Some(raw) => Some(PhoneNumber::normalize(&raw)?.into_inner()),
            None => None,
        };

        let changes = SiteInfoChanges {
            name: params.name,
            slogan: params.slogan,
            about: params.about,
            address: params.address,
            phone,
            email: params.email,
            opening_hours: params.opening_hours,
        };

        tracing::info!("Updating site info {}", id);
        self.site_repository.update_site_info(id, &changes).await
    }

    async fn social_links(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<SocialLink>> {
        self.site_repository.list_social_links(limit, offset).await
    }

    async fn add_social_link(&self, link: NewSocialLink) -> StoreApiResult<SocialLink> {
        if link.platform.trim().is_empty() {
            return Err(StoreApiError::InvalidRequest(
                "platform cannot be empty".to_string(),
            ));
        }
        Self::check_url(&link.url)?;

        self.site_repository.create_social_link(&link).await
    }

    async fn remove_social_link(&self, id: i64) -> StoreApiResult<()> {
        self.site_repository.delete_social_link(id).await
    }

    async fn partners(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Partner>> {
        self.partner_repository.list(limit, offset).await
    }

    async fn add_partner(&self, partner: NewPartner) -> StoreApiResult<Partner> {
        if partner.name.trim().is_empty() {
            return Err(StoreApiError::InvalidRequest(
                "name cannot be empty".to_string(),
            ));
        }
        Self::check_url(&partner.logo_url)?;
        if let Some(ref website) = partner.website_url {
            Self::check_url(website)?;
        }

        tracing::info!("Adding partner: {}", partner.name);
        self.partner_repository.create(&partner).await
    }

    async fn update_partner(&self, id: i64, changes: PartnerChanges) -> StoreApiResult<Partner> {
        if let Some(ref logo) = changes.logo_url {
            Self::check_url(logo)?;
        }
        if let Some(ref website) = changes.website_url {
            Self::check_url(website)?;
        }

        self.partner_repository.update(id, &changes).await
    }

    async fn remove_partner(&self, id: i64) -> StoreApiResult<()> {
        tracing::info!("Removing partner {}", id);
        self.partner_repository.delete(id).await
    }
}
