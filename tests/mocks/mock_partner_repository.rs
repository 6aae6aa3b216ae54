use async_trait::async_trait;
use meddoc_directory::error::{StoreApiError, StoreApiResult};
use meddoc_directory::models::{NewPartner, Partner, PartnerChanges};
use meddoc_directory::repositories::PartnerRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock partner repository for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockPartnerRepository {
    partners: Arc<Mutex<HashMap<i64, Partner>>>,
    next_id: Arc<Mutex<i64>>,
}

#[allow(dead_code)]
impl MockPartnerRepository {
    /// Create a new empty MockPartnerRepository.
    pub fn new() -> Self {
        Self {
            partners: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }
}

#[async_trait]
impl PartnerRepository for MockPartnerRepository {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Partner>> {
        let partners = self.partners.lock().unwrap();
        let mut all: Vec<Partner> = partners.values().cloned().collect();
        all.sort_by_key(|p| p.id);
        Ok(all.into_iter().skip(offset).take(limit).collect())
    }

    async fn create(&self, partner: &NewPartner) -> StoreApiResult<Partner> {
        let mut partners = self.partners.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let created = Partner {
            id,
            name: partner.name.clone(),
            logo_url: partner.logo_url.clone(),
            website_url: partner.website_url.clone(),
            description: partner.description.clone(),
        };
        partners.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, changes: &PartnerChanges) -> StoreApiResult<Partner> {
        let mut partners = self.partners.lock().unwrap();
        let partner = partners
            .get_mut(&id)
            .ok_or_else(|| StoreApiError::NotFound(format!("Partner {} not found", id)))?;

        if let Some(ref name) = changes.name {
            partner.name = name.clone();
        }
        if let Some(ref logo_url) = changes.logo_url {
            partner.logo_url = logo_url.clone();
        }
        if let Some(ref website_url) = changes.website_url {
            partner.website_url = Some(website_url.clone());
        }
        if let Some(ref description) = changes.description {
            partner.description = Some(description.clone());
        }

        Ok(partner.clone())
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        let mut partners = self.partners.lock().unwrap();
        if partners.remove(&id).is_none() {
            return Err(StoreApiError::NotFound(format!("Partner {} not found", id)));
        }
        Ok(())
    }
}
