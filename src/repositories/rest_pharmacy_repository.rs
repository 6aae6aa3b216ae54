use crate::client::AsyncStoreClient;
use crate::error::StoreApiResult;
use crate::models::{NewPharmacy, Pharmacy, PharmacyChanges};
use crate::repositories::traits::PharmacyRepository;
use async_trait::async_trait;

/// Pharmacy repository backed by the hosted record store.
///
/// Delegates every operation to the async store client, keeping a clean
/// boundary between business logic and the HTTP layer.
pub struct RestPharmacyRepository {
    client: AsyncStoreClient,
}

impl RestPharmacyRepository {
    /// Create a new RestPharmacyRepository with the given client.
    pub fn new(client: AsyncStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PharmacyRepository for RestPharmacyRepository {
    async fn get(&self, id: i64) -> StoreApiResult<Pharmacy> {
        self.client.run(move |c| c.get_pharmacy(id)).await
    }

    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>> {
        self.client.run(move |c| c.get_pharmacies(limit, offset)).await
    }

    async fn list_on_duty(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>> {
        self.client
            .run(move |c| c.get_on_duty_pharmacies(limit, offset))
            .await
    }

    async fn search_by_city(
        &self,
        city: &str,
        limit: usize,
        offset: usize,
    ) -> StoreApiResult<Vec<Pharmacy>> {
        let city = city.to_string();
        self.client
            .run(move |c| c.search_pharmacies_by_city(&city, limit, offset))
            .await
    }

    async fn create(&self, pharmacy: &NewPharmacy) -> StoreApiResult<Pharmacy> {
        let pharmacy = pharmacy.clone();
        self.client.run(move |c| c.create_pharmacy(&pharmacy)).await
    }

    async fn update(&self, id: i64, changes: &PharmacyChanges) -> StoreApiResult<Pharmacy> {
        let changes = changes.clone();
        self.client
            .run(move |c| c.update_pharmacy(id, &changes))
            .await
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        self.client.run(move |c| c.delete_pharmacy(id)).await
    }
}
