use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::kvs::{KvStore, KvsError};
use crate::models::Fruit;

/// Storage capability the service depends on. Abstract so business logic
/// can run against a test double or an alternate backing store.
#[async_trait]
pub trait FruitRepository: Send + Sync {
    async fn save(&self, fruit: &Fruit) -> AppResult<Fruit>;
    async fn get_by_id(&self, id: &str) -> AppResult<Fruit>;
}

/// The single concrete implementation, backed by the in-memory [`KvStore`].
/// Owns the serialization boundary: records go in and out as JSON bytes
/// keyed by their id.
pub struct KvsFruitRepository {
    store: Arc<KvStore>,
}

impl KvsFruitRepository {
    pub fn new(store: Arc<KvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FruitRepository for KvsFruitRepository {
    async fn save(&self, fruit: &Fruit) -> AppResult<Fruit> {
        let bytes = serde_json::to_vec(fruit)
            .map_err(|e| AppError::Persistence(format!("error serializing fruit: {e}")))?;
        self.store.set(&fruit.id.to_string(), bytes).await;
        Ok(fruit.clone())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Fruit> {
        let bytes = self.store.get(id).await.map_err(|e| match e {
            KvsError::KeyNotFound(_) => AppError::NotFound("Fruit not found".to_string()),
        })?;
        // A decode failure here means corrupt stored bytes, not a missing
        // record; the two must stay distinguishable.
        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Persistence(format!("error decoding stored fruit: {e}")))
    }
}
