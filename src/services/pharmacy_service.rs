//! Pharmacy service layer.
//!
//! Business logic for the pharmacy directory: phone canonicalization and
//! service-tag validation happen here, before anything reaches the store.

use crate::domain::{service_list, PhoneNumber, ValidationError, SERVICE_VOCABULARY};
use crate::error::{StoreApiError, StoreApiResult};
use crate::models::{NewPharmacy, Pharmacy, PharmacyChanges};
use crate::repositories::PharmacyRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Parameters for creating a pharmacy, as entered in the admin form.
#[derive(Debug, Clone, Default)]
pub struct CreatePharmacyParams {
    pub name: String,
    pub address: String,
    pub city: String,
    /// Free-form phone entry; canonicalized before persistence.
    pub phone: String,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Service tags; validated against the fixed vocabulary.
    pub services: Vec<String>,
    pub on_duty: bool,
}

/// Parameters for updating a pharmacy. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePharmacyParams {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub services: Option<Vec<String>>,
    pub on_duty: Option<bool>,
}

/// Pharmacy service trait for business operations.
#[async_trait]
pub trait PharmacyService: Send + Sync {
    /// List pharmacies with pagination.
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>>;

    /// List pharmacies currently on the duty rotation.
    async fn list_on_duty(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>>;

    /// Search pharmacies by city.
    async fn search_by_city(
        &self,
        city: &str,
        limit: usize,
        offset: usize,
    ) -> StoreApiResult<Vec<Pharmacy>>;

    /// Get a single pharmacy by id.
    async fn get(&self, id: i64) -> StoreApiResult<Pharmacy>;

    /// Create a pharmacy after canonicalizing and validating the input.
    async fn create(&self, params: CreatePharmacyParams) -> StoreApiResult<Pharmacy>;

    /// Update a pharmacy, canonicalizing and validating changed fields.
    async fn update(&self, id: i64, params: UpdatePharmacyParams) -> StoreApiResult<Pharmacy>;

    /// Delete a pharmacy.
    async fn delete(&self, id: i64) -> StoreApiResult<()>;
}

/// Default implementation of PharmacyService.
pub struct PharmacyServiceImpl {
    repository: Arc<dyn PharmacyRepository>,
}

impl PharmacyServiceImpl {
    /// Create a new pharmacy service.
    pub fn new(repository: Arc<dyn PharmacyRepository>) -> Self {
        Self { repository }
    }

    /// Reject service tags outside the fixed vocabulary.
    fn check_services(services: &[String]) -> Result<(), ValidationError> {
        let validation = service_list::validate(services, &SERVICE_VOCABULARY);
        if validation.is_valid {
            Ok(())
        } else {
            Err(ValidationError::UnknownServices(validation.invalid))
        }
    }

    /// Reject blank required fields.
    fn check_required(field: &str, value: &str) -> StoreApiResult<()> {
        if value.trim().is_empty() {
            return Err(StoreApiError::InvalidRequest(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl PharmacyService for PharmacyServiceImpl {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>> {
        self.repository.list(limit, offset).await
    }

    async fn list_on_duty(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>> {
        self.repository.list_on_duty(limit, offset).await
    }

    async fn search_by_city(
        &self,
        city: &str,
        limit: usize,
        offset: usize,
    ) -> StoreApiResult<Vec<Pharmacy>> {
        Self::check_required("city", city)?;
        self.repository.search_by_city(city, limit, offset).await
    }

    async fn get(&self, id: i64) -> StoreApiResult<Pharmacy> {
        self.repository.get(id).await
    }

    async fn create(&self, params: CreatePharmacyParams) -> StoreApiResult<Pharmacy> {
        Self::check_required("name", &params.name)?;
        Self::check_required("address", &params.address)?;
        Self::check_required("city", &params.city)?;

        let phone = PhoneNumber::normalize(&params.phone)?;
        Self::check_services(&params.services)?;

        let encoded = service_list::encode(&params.services);
        let payload = NewPharmacy {
            name: params.name,
            address: params.address,
            city: params.city,
            phone: phone.into_inner(),
            email: params.email,
            latitude: params.latitude,
            longitude: params.longitude,
            service: if encoded.is_empty() {
                None
            } else {
                Some(encoded)
            },
            on_duty: params.on_duty,
        };

        tracing::info!("Creating pharmacy: {}", payload.name);
        self.repository.create(&payload).await
    }

    async fn update(&self, id: i64, params: UpdatePharmacyParams) -> StoreApiResult<Pharmacy> {
        let phone = match params.phone {
            Some(raw) => Some(PhoneNumber::normalize(&raw)?.into_inner()),
            None => None,
        };

        let service = match params.services {
            Some(services) => {
                Self::check_services(&services)?;
                // An explicit empty list clears the field via an empty string.
                Some(service_list::encode(&services))
            }
            None => None,
        };

        if let Some(ref name) = params.name {
            Self::check_required("name", name)?;
        }

        let changes = PharmacyChanges {
            name: params.name,
            address: params.address,
            city: params.city,
            phone,
            email: params.email,
            latitude: params.latitude,
            longitude: params.longitude,
            service,
            on_duty: params.on_duty,
        };

        tracing::info!("Updating pharmacy {}", id);
        self.repository.update(id, &changes).await
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        tracing::info!("Deleting pharmacy {}", id);
        self.repository.delete(id).await
    }
}
