//! Tonik key-value persistence helper
//!
//! A thin, failure-masking layer over a pluggable string key-value
//! backend. Reads that fail for any reason (missing key, backend error,
//! corrupt payload) are logged and degrade to the configured default;
//! writes that fail are logged and swallowed. Persistence problems never
//! surface to the caller.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// A fallible string key-value store.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process backend; never fails.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: HashMap<String, String>,
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed storage over a backend, with a default that masks every failure.
///
/// Values are encoded as JSON.
pub struct Storage<T, B: StorageBackend> {
    backend: Mutex<B>,
    default_value: T,
}

impl<T, B> Storage<T, B>
where
    T: Serialize + DeserializeOwned + Clone,
    B: StorageBackend,
{
    pub fn new(backend: B, default_value: T) -> Self {
        Self {
            backend: Mutex::new(backend),
            default_value,
        }
    }

    /// Retrieve the value stored under `key`, or the default when the key
    /// is missing or the read fails.
    pub fn retrieve(&self, key: &str) -> T {
        let raw = match self.backend.lock().unwrap().get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.default_value.clone(),
            Err(err) => {
                tracing::warn!(key, %err, "storage read failed, using default");
                return self.default_value.clone();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "stored value is corrupt, using default");
                self.default_value.clone()
            }
        }
    }

    /// Store `value` under `key`. Failures are logged and swallowed.
    pub fn store(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key, %err, "failed to encode value for storage");
                return;
            }
        };

        if let Err(err) = self.backend.lock().unwrap().set_item(key, &raw) {
            tracing::warn!(key, %err, "storage write failed");
        }
    }
}
