use async_trait::async_trait;
use meddoc_directory::error::{StoreApiError, StoreApiResult};
use meddoc_directory::models::{NewSocialLink, SiteInfo, SiteInfoChanges, SocialLink};
use meddoc_directory::repositories::SiteRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock site repository for testing: one site-info row plus social links.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSiteRepository {
    site_info: Arc<Mutex<Option<SiteInfo>>>,
    links: Arc<Mutex<HashMap<i64, SocialLink>>>,
    next_id: Arc<Mutex<i64>>,
}

#[allow(dead_code)]
impl MockSiteRepository {
    /// Create a new empty MockSiteRepository.
    pub fn new() -> Self {
        Self {
            site_info: Arc::new(Mutex::new(None)),
            links: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Seed the site-info singleton.
    pub fn set_site_info(&self, info: SiteInfo) {
        *self.site_info.lock().unwrap() = Some(info);
    }
}

#[async_trait]
impl SiteRepository for MockSiteRepository {
    async fn get_site_info(&self) -> StoreApiResult<SiteInfo> {
        self.site_info
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StoreApiError::NotFound("site info".to_string()))
    }

    async fn update_site_info(&self, id: i64, changes: &SiteInfoChanges) -> StoreApiResult<SiteInfo> {
        let mut guard = self.site_info.lock().unwrap();
        let info = guard
            .as_mut()
            .filter(|info| info.id == id)
            .ok_or_else(|| StoreApiError::NotFound(format!("site info id {}", id)))?;

        if let Some(ref name) = changes.name {
            info.name = name.clone();
        }
        if let Some(ref slogan) = changes.slogan {
            info.slogan = Some(slogan.clone());
        }
        if let Some(ref about) = changes.about {
            info.about = about.clone();
        }
        if let Some(ref address) = changes.address {
            info.address = address.clone();
        }
        if let Some(ref phone) = changes.phone {
            info.phone = phone.clone();
        }
        if let Some(ref email) = changes.email {
            info.email = email.clone();
        }
        if let Some(ref hours) = changes.opening_hours {
            info.opening_hours = Some(hours.clone());
        }

        Ok(info.clone())
    }

    async fn list_social_links(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<SocialLink>> {
        let links = self.links.lock().unwrap();
        let mut all: Vec<SocialLink> = links.values().cloned().collect();
        all.sort_by_key(|l| l.id);
        Ok(all.into_iter().skip(offset).take(limit).collect())
    }

    async fn create_social_link(&self, link: &NewSocialLink) -> StoreApiResult<SocialLink> {
        let mut links = self.links.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let created = SocialLink {
            id,
            platform: link.platform.clone(),
            url: link.url.clone(),
            icon: link.icon.clone(),
        };
        links.insert(id, created.clone());
        Ok(created)
    }

    async fn delete_social_link(&self, id: i64) -> StoreApiResult<()> {
        let mut links = self.links.lock().unwrap();
        if links.remove(&id).is_none() {
            return Err(StoreApiError::NotFound(format!("Social link {} not found", id)));
        }
        Ok(())
    }
}
