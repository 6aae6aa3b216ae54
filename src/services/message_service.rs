//! Contact-message service layer.
//!
//! Handles contact-form submissions and the admin inbox.

use crate::domain::{PhoneNumber, ValidationError};
use crate::error::{StoreApiError, StoreApiResult};
use crate::models::{ContactMessage, NewContactMessage};
use crate::repositories::MessageRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Parameters for a contact-form submission.
#[derive(Debug, Clone, Default)]
pub struct SubmitMessageParams {
    pub name: String,
    pub email: String,
    /// Optional free-form phone entry; canonicalized when present.
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Message service trait for business operations.
#[async_trait]
pub trait MessageService: Send + Sync {
    /// List messages, most recent first.
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<ContactMessage>>;

    /// Validate and store a contact-form submission.
    async fn submit(&self, params: SubmitMessageParams) -> StoreApiResult<ContactMessage>;

    /// Mark a message as read.
    async fn mark_read(&self, id: i64) -> StoreApiResult<ContactMessage>;

    /// Delete a message.
    async fn delete(&self, id: i64) -> StoreApiResult<()>;
}

/// Default implementation of MessageService.
pub struct MessageServiceImpl {
    repository: Arc<dyn MessageRepository>,
}

impl MessageServiceImpl {
    /// Create a new message service.
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    /// Validate email format.
    fn check_email(email: &str) -> Result<(), ValidationError> {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() != 2 || parts[0].is_empty() || !parts[1].contains('.') {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageService for MessageServiceImpl {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<ContactMessage>> {
        self.repository.list(limit, offset).await
    }

    async fn submit(&self, params: SubmitMessageParams) -> StoreApiResult<ContactMessage> {
        if params.name.trim().is_empty() || params.message.trim().is_empty() {
            return Err(StoreApiError::InvalidRequest(
                "name and message are required".to_string(),
            ));
        }

        Self::check_email(&params.email)?;

        let phone = match params.phone {
            Some(raw) if !raw.trim().is_empty() => {
                Some(PhoneNumber::normalize(&raw)?.into_inner())
            }
            _ => None,
        };

        let payload = NewContactMessage {
            name: params.name,
            email: params.email,
            phone,
            subject: params.subject,
            message: params.message,
            read: false,
        };

        tracing::info!("Storing contact message from {}", payload.email);
        self.repository.create(&payload).await
    }

    async fn mark_read(&self, id: i64) -> StoreApiResult<ContactMessage> {
        self.repository.mark_read(id).await
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        tracing::info!("Deleting message {}", id);
        self.repository.delete(id).await
    }
}
