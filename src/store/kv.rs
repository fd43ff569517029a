// store/kv.rs
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::AppError;

/// Persistent mapping from string keys to JSON documents. All operations are
/// asynchronous and may fail with an I/O error; callers catch and log. There
/// are no transactions: a read-modify-write sequence racing another caller on
/// the same key is last-write-wins, which the single-writer runtime permits.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError>;
    async fn set(&self, key: &str, value: Value) -> Result<(), AppError>;
    async fn remove(&self, key: &str) -> Result<(), AppError>;

    fn backend(&self) -> &'static str;
}

/// One JSON file per key under a base directory.
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: impl AsRef<Path>) -> Result<Self, AppError> {
        let base = base.as_ref().to_path_buf();
        std::fs::create_dir_all(&base)?;
        Ok(FileStore { base })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys like `application_form_p1` must map to safe file names
        let sanitized: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base.join(format!("{}.json", sanitized))
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let path = self.path_for(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let value = serde_json::from_slice(&bytes)
                    .map_err(|e| AppError::corrupt(key, e))?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        let path = self.path_for(key);
        let bytes = serde_json::to_vec(&value).map_err(|e| AppError::corrupt(key, e))?;
        tokio::fs::write(&path, bytes).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}

/// In-memory adapter used by tests and as the degraded fallback when the
/// file store's directory cannot be created.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("studynest-kv-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn file_store_round_trips_and_removes() {
        let store = FileStore::new(temp_dir()).unwrap();

        assert_eq!(store.get("search_filters").await.unwrap(), None);

        let value = json!({"min": 0, "max": 4500});
        store.set("search_filters", value.clone()).await.unwrap();
        assert_eq!(store.get("search_filters").await.unwrap(), Some(value));

        store.remove("search_filters").await.unwrap();
        assert_eq!(store.get("search_filters").await.unwrap(), None);

        // Removing a missing key is not an error
        store.remove("search_filters").await.unwrap();
    }

    #[tokio::test]
    async fn file_store_sanitizes_awkward_keys() {
        let store = FileStore::new(temp_dir()).unwrap();
        store
            .set("application_form_p/1", json!({"step": 1}))
            .await
            .unwrap();
        assert!(store.get("application_form_p/1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemoryStore::default();
        store.set("userName", json!("Lerato")).await.unwrap();
        assert_eq!(store.get("userName").await.unwrap(), Some(json!("Lerato")));
        store.remove("userName").await.unwrap();
        assert_eq!(store.get("userName").await.unwrap(), None);
        assert_eq!(store.backend(), "memory");
    }
}
