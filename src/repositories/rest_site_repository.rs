use crate::client::AsyncStoreClient;
use crate::error::StoreApiResult;
use crate::models::{NewSocialLink, SiteInfo, SiteInfoChanges, SocialLink};
use crate::repositories::traits::SiteRepository;
use async_trait::async_trait;

/// Site-info and social-link repository backed by the hosted record store.
pub struct RestSiteRepository {
    client: AsyncStoreClient,
}

impl RestSiteRepository {
    /// Create a new RestSiteRepository with the given client.
    pub fn new(client: AsyncStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SiteRepository for RestSiteRepository {
    async fn get_site_info(&self) -> StoreApiResult<SiteInfo> {
        self.client.run(|c| c.get_site_info()).await
    }

    async fn update_site_info(&self, id: i64, changes: &SiteInfoChanges) -> StoreApiResult<SiteInfo> {
        let changes = changes.clone();
        self.client
            .run(move |c| c.update_site_info(id, &changes))
            .await
    }

    async fn list_social_links(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<SocialLink>> {
        self.client
            .run(move |c| c.get_social_links(limit, offset))
            .await
    }

    async fn create_social_link(&self, link: &NewSocialLink) -> StoreApiResult<SocialLink> {
        let link = link.clone();
        self.client.run(move |c| c.create_social_link(&link)).await
    }

    async fn delete_social_link(&self, id: i64) -> StoreApiResult<()> {
        self.client.run(move |c| c.delete_social_link(id)).await
    }
}
