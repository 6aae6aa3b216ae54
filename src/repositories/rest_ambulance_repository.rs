use crate::client::AsyncStoreClient;
use crate::error::StoreApiResult;
use crate::models::{Ambulance, AmbulanceChanges, NewAmbulance};
use crate::repositories::traits::AmbulanceRepository;
use async_trait::async_trait;

/// Ambulance repository backed by the hosted record store.
pub struct RestAmbulanceRepository {
    client: AsyncStoreClient,
}

impl RestAmbulanceRepository {
    /// Create a new RestAmbulanceRepository with the given client.
    pub fn new(client: AsyncStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AmbulanceRepository for RestAmbulanceRepository {
    async fn get(&self, id: i64) -> StoreApiResult<Ambulance> {
        self.client.run(move |c| c.get_ambulance(id)).await
    }

    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Ambulance>> {
        self.client.run(move |c| c.get_ambulances(limit, offset)).await
    }

    async fn create(&self, ambulance: &NewAmbulance) -> StoreApiResult<Ambulance> {
        let ambulance = ambulance.clone();
        self.client.run(move |c| c.create_ambulance(&ambulance)).await
    }

    async fn update(&self, id: i64, changes: &AmbulanceChanges) -> StoreApiResult<Ambulance> {
        let changes = changes.clone();
        self.client
            .run(move |c| c.update_ambulance(id, &changes))
            .await
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        self.client.run(move |c| c.delete_ambulance(id)).await
    }
}
