use async_trait::async_trait;
use blackbox_core::model::{CameraMastery, Progress};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Key the presentation progress is stored under unless configured otherwise.
pub const DEFAULT_PROGRESS_KEY: &str = "blackbox-presentation-progress";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of the presentation progress.
///
/// Field names match the JSON layout written by earlier versions of the
/// presentation, so existing saves keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub current_slide: i64,
    pub camera_mastery: CameraMastery,
    #[serde(default)]
    pub slide2_unlocked: bool,
    #[serde(default)]
    pub slide3_unlocked: bool,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_progress(progress: &Progress) -> Self {
        Self {
            current_slide: i64::try_from(progress.current_slide()).unwrap_or_default(),
            camera_mastery: progress.camera_mastery(),
            slide2_unlocked: progress.lab_unlocked(),
            slide3_unlocked: progress.deck_unlocked(),
        }
    }

    /// Convert the record back into domain progress.
    ///
    /// The stored unlock flags are ignored; they are derived from
    /// `camera_mastery` again so a stale or hand-edited record cannot unlock
    /// slides on its own.
    #[must_use]
    pub fn into_progress(self, total_slides: usize) -> Progress {
        Progress::from_persisted(self.current_slide, self.camera_mastery, total_slides)
    }

    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the record cannot be encoded.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if `raw` is not a valid record.
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))
    }
}

/// String key-value persistence, the only thing the presentation needs from a backend.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn delete_value(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn delete_value(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Typed access to the progress record stored under a single key.
#[derive(Clone)]
pub struct ProgressRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ProgressRepository {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored record, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails or the stored value does
    /// not decode.
    pub async fn load(&self) -> Result<Option<ProgressRecord>, StorageError> {
        let Some(raw) = self.store.get_value(&self.key).await? else {
            return Ok(None);
        };
        ProgressRecord::from_json(&raw).map(Some)
    }

    /// # Errors
    ///
    /// Returns `StorageError` if encoding or writing fails.
    pub async fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let raw = record.to_json()?;
        self.store.put_value(&self.key, &raw).await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.delete_value(&self.key).await
    }
}

/// Backend handle, swappable behind a trait object.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let kv: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
        Self { kv }
    }

    #[must_use]
    pub fn progress(&self, key: impl Into<String>) -> ProgressRepository {
        ProgressRepository::new(Arc::clone(&self.kv), key)
    }
}
