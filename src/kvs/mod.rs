use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum KvsError {
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

/// In-memory key-value store. Keys are opaque strings, values opaque byte
/// sequences; callers own the serialization format. Reads proceed
/// concurrently, writes are serialized, and a `get` observes either a fully
/// written prior `set` or nothing.
///
/// Constructed once at wiring time and handed to the repository — never
/// reached through global state, so tests get a fresh store each.
#[derive(Debug, Default)]
pub struct KvStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl KvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, key: &str, value: Vec<u8>) {
        self.entries.write().await.insert(key.to_string(), value);
    }

    /// Absent keys surface as `KeyNotFound`, distinct from any decode
    /// failure a caller may hit on the returned bytes.
    pub async fn get(&self, key: &str) -> Result<Vec<u8>, KvsError> {
        self.entries
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| KvsError::KeyNotFound(key.to_string()))
    }
}
