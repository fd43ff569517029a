// store/client.rs
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;
use crate::store::kv::KvStore;

/// Shared handle over the device key-value store. Values are checked against
/// their schema at this boundary: readers get typed records or an error,
/// never a trusted raw blob.
#[derive(Clone)]
pub struct StoreClient {
    kv: Arc<dyn KvStore>,
}

impl std::fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreClient")
            .field("backend", &self.kv.backend())
            .finish()
    }
}

impl StoreClient {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        StoreClient { kv }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        match self.kv.get(key).await? {
            Some(value) => {
                let typed =
                    serde_json::from_value(value).map_err(|e| AppError::corrupt(key, e))?;
                Ok(Some(typed))
            }
            None => Ok(None),
        }
    }

    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_value(value).map_err(|e| AppError::corrupt(key, e))?;
        self.kv.set(key, raw).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.kv.remove(key).await
    }

    /// Read a list-shaped key with the catch-and-log posture: a failed or
    /// corrupt read degrades to the default value so the screens render empty
    /// rather than erroring.
    pub async fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.get_json::<T>(key).await {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::error!("Failed to read {}: {}", key, e);
                T::default()
            }
        }
    }

    pub fn backend_status(&self) -> &'static str {
        self.kv.backend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;
    use serde_json::json;

    fn memory_client() -> StoreClient {
        StoreClient::new(Arc::new(MemoryStore::default()))
    }

    #[tokio::test]
    async fn typed_round_trip() {
        let client = memory_client();
        let liked = vec!["p1".to_string(), "p4".to_string()];
        client.set_json("liked_properties", &liked).await.unwrap();
        let back: Option<Vec<String>> = client.get_json("liked_properties").await.unwrap();
        assert_eq!(back, Some(liked));
    }

    #[tokio::test]
    async fn corrupt_value_surfaces_as_error_but_degrades_to_default() {
        let client = memory_client();
        client
            .set_json("liked_properties", &json!({"not": "a list"}))
            .await
            .unwrap();

        let typed: Result<Option<Vec<String>>, _> = client.get_json("liked_properties").await;
        assert!(matches!(typed, Err(AppError::Corrupt { .. })));

        let degraded: Vec<String> = client.get_or_default("liked_properties").await;
        assert!(degraded.is_empty());
    }
}
