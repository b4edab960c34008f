//! In-memory storage, used by tests and local development.
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Result, Storage, StorageEntry};

/// A [`Storage`] implementation backed by a process-local map.
///
/// Writes are only durable for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn put(&self, entry: StorageEntry) -> Result<()> {
        self.entries.write().await.insert(entry.key, entry.value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<StorageEntry>> {
        let entries = self.entries.read().await;

        Ok(entries
            .get(key)
            .map(|value| StorageEntry::new(key, value.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get() {
        let storage = InMemoryStorage::new();

        storage
            .put(StorageEntry::new("config/test", b"value".to_vec()))
            .await
            .expect("failed to put entry");

        let entry = storage
            .get("config/test")
            .await
            .expect("failed to get entry")
            .expect("entry must exist");
        assert_eq!(entry.value, b"value");
    }

    #[tokio::test]
    async fn put_overwrites() {
        let storage = InMemoryStorage::new();

        storage
            .put(StorageEntry::new("slot", b"old".to_vec()))
            .await
            .expect("failed to put entry");
        storage
            .put(StorageEntry::new("slot", b"new".to_vec()))
            .await
            .expect("failed to overwrite entry");

        let entry = storage
            .get("slot")
            .await
            .expect("failed to get entry")
            .expect("entry must exist");
        assert_eq!(entry.value, b"new");
    }

    #[tokio::test]
    async fn get_missing_key() {
        let storage = InMemoryStorage::new();

        let entry = storage.get("nope").await.expect("failed to get entry");
        assert!(entry.is_none());
    }
}
