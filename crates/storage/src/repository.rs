use async_trait::async_trait;
use course_core::model::ProgressKey;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage quota exceeded ({needed} bytes needed, {quota} allowed)")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("storage unavailable")]
    Unavailable,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Key-value contract for persisted checklist state.
///
/// Values are opaque strings; decoding them (and tolerating garbage) is the
/// caller's job, so adapters never interpret what they store.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the raw stored value for a key.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn read_progress(&self, key: &ProgressKey) -> Result<Option<String>, StorageError>;

    /// Replace the stored value for a key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn write_progress(&self, key: &ProgressKey, value: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// An optional byte quota models device storage limits: a write that would
/// push the total of stored keys and values past it is refused.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            quota: None,
        }
    }

    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::new()
        }
    }

    /// Store a raw value under an already-rendered key, bypassing the quota.
    ///
    /// Useful for seeding state that the app itself would never write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn put_raw(&self, key: impl Into<String>, value: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.into(), value.into());
        Ok(())
    }

    /// Raw value under an already-rendered key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn read_progress(&self, key: &ProgressKey) -> Result<Option<String>, StorageError> {
        self.get_raw(&key.to_string())
    }

    async fn write_progress(&self, key: &ProgressKey, value: &str) -> Result<(), StorageError> {
        let key = key.to_string();
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        if let Some(quota) = self.quota {
            let others: usize = guard
                .iter()
                .filter(|(k, _)| **k != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        guard.insert(key, value.to_owned());
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let progress: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        Self { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{Slug, Track};

    fn key(slug: &str) -> ProgressKey {
        ProgressKey::progress(Track::Python, Slug::from(slug))
    }

    #[tokio::test]
    async fn round_trips_raw_values() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.read_progress(&key("a")).await.unwrap(), None);

        repo.write_progress(&key("a"), r#"{"x":true}"#).await.unwrap();
        let stored = repo.read_progress(&key("a")).await.unwrap();
        assert_eq!(stored.as_deref(), Some(r#"{"x":true}"#));
        assert_eq!(
            repo.get_raw("pyd:python:progress:a").unwrap().as_deref(),
            Some(r#"{"x":true}"#)
        );
    }

    #[tokio::test]
    async fn keys_are_isolated_by_track() {
        let repo = InMemoryRepository::new();
        let python = ProgressKey::progress(Track::Python, Slug::from("intro"));
        let pandas = ProgressKey::progress(Track::Pandas, Slug::from("intro"));
        repo.write_progress(&python, "{}").await.unwrap();
        assert_eq!(repo.read_progress(&pandas).await.unwrap(), None);
    }

    #[tokio::test]
    async fn quota_refuses_oversized_writes() {
        let repo = InMemoryRepository::with_quota(40);
        let err = repo
            .write_progress(&key("a"), &"x".repeat(64))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { quota: 40, .. }));
        assert_eq!(repo.read_progress(&key("a")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn quota_counts_replacement_not_addition() {
        // key "pyd:python:progress:a" is 21 bytes
        let repo = InMemoryRepository::with_quota(30);
        repo.write_progress(&key("a"), "12345678").await.unwrap();
        repo.write_progress(&key("a"), "87654321").await.unwrap();
        assert_eq!(
            repo.read_progress(&key("a")).await.unwrap().as_deref(),
            Some("87654321")
        );
    }
}
