use crate::client::AsyncStoreClient;
use crate::error::StoreApiResult;
use crate::models::{ContactMessage, NewContactMessage};
use crate::repositories::traits::MessageRepository;
use async_trait::async_trait;

/// Contact-message repository backed by the hosted record store.
pub struct RestMessageRepository {
    client: AsyncStoreClient,
}

impl RestMessageRepository {
    /// Create a new RestMessageRepository with the given client.
    pub fn new(client: AsyncStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageRepository for RestMessageRepository {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<ContactMessage>> {
        self.client.run(move |c| c.get_messages(limit, offset)).await
    }

    async fn create(&self, message: &NewContactMessage) -> StoreApiResult<ContactMessage> {
        let message = message.clone();
        self.client.run(move |c| c.create_message(&message)).await
    }

    async fn mark_read(&self, id: i64) -> StoreApiResult<ContactMessage> {
        self.client.run(move |c| c.mark_message_read(id)).await
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        self.client.run(move |c| c.delete_message(id)).await
    }
}
