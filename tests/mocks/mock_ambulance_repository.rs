use async_trait::async_trait;
use meddoc_directory::error::{StoreApiError, StoreApiResult};
use meddoc_directory::models::{Ambulance, AmbulanceChanges, NewAmbulance};
use meddoc_directory::repositories::AmbulanceRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock ambulance repository for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAmbulanceRepository {
    ambulances: Arc<Mutex<HashMap<i64, Ambulance>>>,
    next_id: Arc<Mutex<i64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAmbulanceRepository {
    /// Create a new empty MockAmbulanceRepository.
    pub fn new() -> Self {
        Self {
            ambulances: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed an ambulance with a preassigned id.
    pub fn add_ambulance(&self, ambulance: Ambulance) {
        let mut ambulances = self.ambulances.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(ambulance.id + 1);
        ambulances.insert(ambulance.id, ambulance);
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
}

#[async_trait]
impl AmbulanceRepository for MockAmbulanceRepository {
    async fn get(&self, id: i64) -> StoreApiResult<Ambulance> {
        let ambulances = self.ambulances.lock().unwrap();
        ambulances
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreApiError::NotFound(format!("Ambulance {} not found", id)))
    }

    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Ambulance>> {
        let ambulances = self.ambulances.lock().unwrap();
        let mut all: Vec<Ambulance> = ambulances.values().cloned().collect();
        all.sort_by_key(|a| a.id);
        Ok(all.into_iter().skip(offset).take(limit).collect())
    }

    async fn create(&self, ambulance: &NewAmbulance) -> StoreApiResult<Ambulance> {
        self.track_call("create");

        let mut ambulances = self.ambulances.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let created = Ambulance {
            id,
            name: ambulance.name.clone(),
            phone: ambulance.phone.clone(),
            address: ambulance.address.clone(),
            description: ambulance.description.clone(),
            available: ambulance.available,
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            updated_at: None,
        };

        ambulances.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, changes: &AmbulanceChanges) -> StoreApiResult<Ambulance> {
        let mut ambulances = self.ambulances.lock().unwrap();
        let ambulance = ambulances
            .get_mut(&id)
            .ok_or_else(|| StoreApiError::NotFound(format!("Ambulance {} not found", id)))?;

        if let Some(ref name) = changes.name {
            ambulance.name = name.clone();
        }
        if let Some(ref phone) = changes.phone {
            ambulance.phone = phone.clone();
        }
        if let Some(ref address) = changes.address {
            ambulance.address = address.clone();
        }
        if let Some(ref description) = changes.description {
            ambulance.description = Some(description.clone());
        }
        if let Some(available) = changes.available {
            ambulance.available = available;
        }
        ambulance.updated_at = Some(chrono::Utc::now().to_rfc3339());

        Ok(ambulance.clone())
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        let mut ambulances = self.ambulances.lock().unwrap();
        if ambulances.remove(&id).is_none() {
            return Err(StoreApiError::NotFound(format!("Ambulance {} not found", id)));
        }
        Ok(())
    }
}
