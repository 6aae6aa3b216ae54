use async_trait::async_trait;
use meddoc_directory::error::{StoreApiError, StoreApiResult};
use meddoc_directory::models::{ContactMessage, NewContactMessage};
use meddoc_directory::repositories::MessageRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact-message repository for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockMessageRepository {
    messages: Arc<Mutex<HashMap<i64, ContactMessage>>>,
    next_id: Arc<Mutex<i64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockMessageRepository {
    /// Create a new empty MockMessageRepository.
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed a message with a preassigned id.
    pub fn add_message(&self, message: ContactMessage) {
        let mut messages = self.messages.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(message.id + 1);
        messages.insert(message.id, message);
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
impl MessageRepository for MockMessageRepository {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<ContactMessage>> {
        self.track_call("list");

        let messages = self.messages.lock().unwrap();
        let mut all: Vec<ContactMessage> = messages.values().cloned().collect();
        // Most recent first, mirroring the store's created_at ordering
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all.into_iter().skip(offset).take(limit).collect())
    }

    async fn create(&self, message: &NewContactMessage) -> StoreApiResult<ContactMessage> {
        self.track_call("create");

        let mut messages = self.messages.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let created = ContactMessage {
            id,
            name: message.name.clone(),
            email: message.email.clone(),
            phone: message.phone.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            read: message.read,
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        };

        messages.insert(id, created.clone());
        Ok(created)
    }

    async fn mark_read(&self, id: i64) -> StoreApiResult<ContactMessage> {
        self.track_call("mark_read");

        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .get_mut(&id)
            .ok_or_else(|| StoreApiError::NotFound(format!("Message {} not found", id)))?;
        message.read = true;
        Ok(message.clone())
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        self.track_call("delete");

        let mut messages = self.messages.lock().unwrap();
        if messages.remove(&id).is_none() {
            return Err(StoreApiError::NotFound(format!("Message {} not found", id)));
        }
        Ok(())
    }
}
