//! Async wrapper around the synchronous StoreClient.
//!
//! This module provides an async interface to the synchronous client by
//! running each HTTP operation through `tokio::task::spawn_blocking` on the
//! blocking thread pool, preventing blocking of the async runtime.

use crate::client::StoreClient;
use crate::error::{StoreApiError, StoreApiResult};
use std::sync::Arc;

/// Async handle over the synchronous StoreClient.
///
/// Cheap to clone; repositories hold one each and run their operations
/// through [`AsyncStoreClient::run`].
#[derive(Clone)]
pub struct AsyncStoreClient {
    client: Arc<StoreClient>,
}

impl AsyncStoreClient {
    pub fn new(client: StoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Shared reference to the underlying sync client.
    pub fn client(&self) -> &Arc<StoreClient> {
        &self.client
    }

    /// Run a blocking client operation on the blocking pool.
    ///
    /// The closure receives the sync client and must own everything else it
    /// needs (ids are `Copy`, strings get cloned at the call site).
    pub async fn run<T, F>(&self, op: F) -> StoreApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&StoreClient) -> StoreApiResult<T> + Send + 'static,
    {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || op(&client))
            .await
            .map_err(|e| StoreApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
