use async_trait::async_trait;
use meddoc_directory::error::{StoreApiError, StoreApiResult};
use meddoc_directory::models::{NewPharmacy, Pharmacy, PharmacyChanges};
use meddoc_directory::repositories::PharmacyRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock pharmacy repository for testing.
///
/// In-memory implementation of PharmacyRepository that can be configured
/// with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockPharmacyRepository {
    pharmacies: Arc<Mutex<HashMap<i64, Pharmacy>>>,
    next_id: Arc<Mutex<i64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockPharmacyRepository {
    /// Create a new empty MockPharmacyRepository.
    pub fn new() -> Self {
        Self {
            pharmacies: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed a pharmacy with a preassigned id.
    pub fn add_pharmacy(&self, pharmacy: Pharmacy) {
        let mut pharmacies = self.pharmacies.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(pharmacy.id + 1);
        pharmacies.insert(pharmacy.id, pharmacy);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn sorted(pharmacies: &HashMap<i64, Pharmacy>) -> Vec<Pharmacy> {
        let mut all: Vec<Pharmacy> = pharmacies.values().cloned().collect();
        all.sort_by_key(|p| p.id);
        all
    }
}

#[async_trait]
impl PharmacyRepository for MockPharmacyRepository {
    async fn get(&self, id: i64) -> StoreApiResult<Pharmacy> {
        self.track_call("get");

        let pharmacies = self.pharmacies.lock().unwrap();
        pharmacies
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreApiError::NotFound(format!("Pharmacy {} not found", id)))
    }

    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>> {
        self.track_call("list");

        let pharmacies = self.pharmacies.lock().unwrap();
        Ok(Self::sorted(&pharmacies)
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn list_on_duty(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>> {
        self.track_call("list_on_duty");

        let pharmacies = self.pharmacies.lock().unwrap();
        Ok(Self::sorted(&pharmacies)
            .into_iter()
            .filter(|p| p.on_duty)
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn search_by_city(
        &self,
        city: &str,
        limit: usize,
        offset: usize,
    ) -> StoreApiResult<Vec<Pharmacy>> {
        self.track_call("search_by_city");

        let city_lower = city.to_lowercase();
        let pharmacies = self.pharmacies.lock().unwrap();
        Ok(Self::sorted(&pharmacies)
            .into_iter()
            .filter(|p| p.city.to_lowercase().contains(&city_lower))
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn create(&self, pharmacy: &NewPharmacy) -> StoreApiResult<Pharmacy> {
        self.track_call("create");

        let mut pharmacies = self.pharmacies.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let created = Pharmacy {
            id,
            name: pharmacy.name.clone(),
            address: pharmacy.address.clone(),
            city: pharmacy.city.clone(),
            phone: pharmacy.phone.clone(),
            email: pharmacy.email.clone(),
            latitude: pharmacy.latitude,
            longitude: pharmacy.longitude,
            service: pharmacy.service.clone(),
            on_duty: pharmacy.on_duty,
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            updated_at: None,
        };

        pharmacies.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, changes: &PharmacyChanges) -> StoreApiResult<Pharmacy> {
        self.track_call("update");

        let mut pharmacies = self.pharmacies.lock().unwrap();
        let pharmacy = pharmacies
            .get_mut(&id)
            .ok_or_else(|| StoreApiError::NotFound(format!("Pharmacy {} not found", id)))?;

        if let Some(ref name) = changes.name {
            pharmacy.name = name.clone();
        }
        if let Some(ref address) = changes.address {
            pharmacy.address = address.clone();
        }
        if let Some(ref city) = changes.city {
            pharmacy.city = city.clone();
        }
        if let Some(ref phone) = changes.phone {
            pharmacy.phone = phone.clone();
        }
        if let Some(ref email) = changes.email {
            pharmacy.email = Some(email.clone());
        }
        if let Some(latitude) = changes.latitude {
            pharmacy.latitude = Some(latitude);
        }
        if let Some(longitude) = changes.longitude {
            pharmacy.longitude = Some(longitude);
        }
        if let Some(ref service) = changes.service {
            pharmacy.service = if service.is_empty() {
                None
            } else {
                Some(service.clone())
            };
        }
        if let Some(on_duty) = changes.on_duty {
            pharmacy.on_duty = on_duty;
        }
        pharmacy.updated_at = Some(chrono::Utc::now().to_rfc3339());

        Ok(pharmacy.clone())
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        self.track_call("delete");

        let mut pharmacies = self.pharmacies.lock().unwrap();
        if pharmacies.remove(&id).is_none() {
            return Err(StoreApiError::NotFound(format!("Pharmacy {} not found", id)));
        }
        Ok(())
    }
}
