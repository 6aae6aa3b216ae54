//! Ambulance service layer.

use crate::domain::PhoneNumber;
use crate::error::{StoreApiError, StoreApiResult};
use crate::models::{Ambulance, AmbulanceChanges, NewAmbulance};
use crate::repositories::AmbulanceRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Parameters for creating an ambulance record.
#[derive(Debug, Clone, Default)]
pub struct CreateAmbulanceParams {
    pub name: String,
    /// Free-form phone entry; canonicalized before persistence.
    pub phone: String,
    pub address: String,
    pub description: Option<String>,
    pub available: bool,
}

/// Parameters for updating an ambulance record. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateAmbulanceParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Ambulance service trait for business operations.
#[async_trait]
pub trait AmbulanceService: Send + Sync {
    /// List ambulances with pagination.
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Ambulance>>;

    /// Get a single ambulance by id.
    async fn get(&self, id: i64) -> StoreApiResult<Ambulance>;

    /// Create an ambulance record after canonicalizing the phone.
    async fn create(&self, params: CreateAmbulanceParams) -> StoreApiResult<Ambulance>;

    /// Update an ambulance record, canonicalizing a changed phone.
    async fn update(&self, id: i64, params: UpdateAmbulanceParams) -> StoreApiResult<Ambulance>;

    /// Delete an ambulance record.
    async fn delete(&self, id: i64) -> StoreApiResult<()>;
}

/// Default implementation of AmbulanceService.
pub struct AmbulanceServiceImpl {
    repository: Arc<dyn AmbulanceRepository>,
}

impl AmbulanceServiceImpl {
    /// Create a new ambulance service.
    pub fn new(repository: Arc<dyn AmbulanceRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AmbulanceService for AmbulanceServiceImpl {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Ambulance>> {
        self.repository.list(limit, offset).await
    }

    async fn get(&self, id: i64) -> StoreApiResult<Ambulance> {
        self.repository.get(id).await
    }

    async fn create(&self, params: CreateAmbulanceParams) -> StoreApiResult<Ambulance> {
        if params.name.trim().is_empty() {
            return Err(StoreApiError::InvalidRequest(
                "name cannot be empty".to_string(),
            ));
        }

        let phone = PhoneNumber::normalize(&params.phone)?;

        let payload = NewAmbulance {
            name: params.name,
            phone: phone.into_inner(),
            address: params.address,
            description: params.description,
            available: params.available,
        };

        tracing::info!("Creating ambulance record: {}", payload.name);
        self.repository.create(&payload).await
    }

    async fn update(&self, id: i64, params: UpdateAmbulanceParams) -> StoreApiResult<Ambulance> {
        let phone = match params.phone {
            Some(raw) => Some(PhoneNumber::normalize(&raw)?.into_inner()),
            None => None,
        };

        let changes = AmbulanceChanges {
            name: params.name,
            phone,
            address: params.address,
            description: params.description,
            available: params.available,
        };

        self.repository.update(id, &changes).await
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        tracing::info!("Deleting ambulance record {}", id);
        self.repository.delete(id).await
    }
}
