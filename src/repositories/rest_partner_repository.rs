use crate::client::AsyncStoreClient;
use crate::error::StoreApiResult;
use crate::models::{NewPartner, Partner, PartnerChanges};
use crate::repositories::traits::PartnerRepository;
use async_trait::async_trait;

/// Partner repository backed by the hosted record store.
pub struct RestPartnerRepository {
    client: AsyncStoreClient,
}

impl RestPartnerRepository {
    /// Create a new RestPartnerRepository with the given client.
    pub fn new(client: AsyncStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PartnerRepository for RestPartnerRepository {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Partner>> {
        self.client.run(move |c| c.get_partners(limit, offset)).await
    }

    async fn create(&self, partner: &NewPartner) -> StoreApiResult<Partner> {
        let partner = partner.clone();
        self.client.run(move |c| c.create_partner(&partner)).await
    }

    async fn update(&self, id: i64, changes: &PartnerChanges) -> StoreApiResult<Partner> {
        let changes = changes.clone();
        self.client.run(move |c| c.update_partner(id, &changes)).await
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        self.client.run(move |c| c.delete_partner(id)).await
    }
}
