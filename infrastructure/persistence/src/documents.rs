use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use business::domain::errors::StorageError;
use business::domain::storage::KeyValueStore;

/// A single JSON document stored under a fixed key.
pub struct JsonDocument {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
}

impl JsonDocument {
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self { store, key }
    }

    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get(self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            tracing::warn!(key = self.key, error = %e, "stored document is unreadable");
            StorageError::serialization()
        })
    }

    pub fn save<T: Serialize>(&self, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|_| StorageError::serialization())?;
        self.store.set(self.key, &raw)
    }
}
