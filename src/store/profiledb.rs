// store/profiledb.rs
use async_trait::async_trait;

use super::client::StoreClient;
use super::keys;
use crate::error::AppError;
use crate::models::profilemodel::PersonalInfo;

#[async_trait]
pub trait ProfileExt {
    /// Opaque device file reference; stored and returned as-is.
    async fn profile_image(&self) -> Result<Option<String>, AppError>;

    async fn save_profile_image(&self, reference: &str) -> Result<(), AppError>;

    async fn user_name(&self) -> Result<Option<String>, AppError>;

    async fn save_user_name(&self, name: &str) -> Result<(), AppError>;

    async fn personal_info(&self) -> Result<PersonalInfo, AppError>;

    async fn save_personal_info(&self, info: &PersonalInfo) -> Result<(), AppError>;
}

#[async_trait]
impl ProfileExt for StoreClient {
    async fn profile_image(&self) -> Result<Option<String>, AppError> {
        self.get_json(keys::PROFILE_IMAGE).await
    }

    async fn save_profile_image(&self, reference: &str) -> Result<(), AppError> {
        self.set_json(keys::PROFILE_IMAGE, &reference).await
    }

    async fn user_name(&self) -> Result<Option<String>, AppError> {
        self.get_json(keys::USER_NAME).await
    }

    async fn save_user_name(&self, name: &str) -> Result<(), AppError> {
        self.set_json(keys::USER_NAME, &name).await
    }

    async fn personal_info(&self) -> Result<PersonalInfo, AppError> {
        Ok(self
            .get_json(keys::PERSONAL_INFO)
            .await?
            .unwrap_or_default())
    }

    async fn save_personal_info(&self, info: &PersonalInfo) -> Result<(), AppError> {
        self.set_json(keys::PERSONAL_INFO, info).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn profile_keys_round_trip() {
        let store = StoreClient::new(Arc::new(MemoryStore::default()));

        assert_eq!(store.profile_image().await.unwrap(), None);
        store
            .save_profile_image("file:///data/user/0/pic.jpg")
            .await
            .unwrap();
        assert_eq!(
            store.profile_image().await.unwrap().as_deref(),
            Some("file:///data/user/0/pic.jpg")
        );

        store.save_user_name("Lerato").await.unwrap();
        assert_eq!(store.user_name().await.unwrap().as_deref(), Some("Lerato"));

        let info = PersonalInfo {
            full_name: Some("Lerato Mokoena".to_string()),
            email: Some("lerato@example.com".to_string()),
            ..Default::default()
        };
        store.save_personal_info(&info).await.unwrap();
        assert_eq!(store.personal_info().await.unwrap(), info);
    }
}
