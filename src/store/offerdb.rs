// store/offerdb.rs
use async_trait::async_trait;

use super::client::StoreClient;
use super::keys;
use crate::error::AppError;
use crate::models::offermodel::{AccommodationOffer, ApprovedAccommodation, UserStatus};

#[async_trait]
pub trait OfferExt {
    /// `None` means the offer pool has never been written; the service seeds
    /// the fixtures in that case.
    async fn load_offers(&self) -> Result<Option<Vec<AccommodationOffer>>, AppError>;

    async fn save_offers(&self, offers: &[AccommodationOffer]) -> Result<(), AppError>;

    async fn approved_accommodation(&self) -> Result<Option<ApprovedAccommodation>, AppError>;

    async fn save_approved_accommodation(
        &self,
        approved: &ApprovedAccommodation,
    ) -> Result<(), AppError>;

    async fn user_status(&self) -> Result<UserStatus, AppError>;

    async fn save_user_status(&self, status: UserStatus) -> Result<(), AppError>;
}

#[async_trait]
impl OfferExt for StoreClient {
    async fn load_offers(&self) -> Result<Option<Vec<AccommodationOffer>>, AppError> {
        self.get_json(keys::ACCOMMODATION_OFFERS).await
    }

    async fn save_offers(&self, offers: &[AccommodationOffer]) -> Result<(), AppError> {
        self.set_json(keys::ACCOMMODATION_OFFERS, &offers).await
    }

    async fn approved_accommodation(&self) -> Result<Option<ApprovedAccommodation>, AppError> {
        self.get_json(keys::APPROVED_ACCOMMODATION).await
    }

    async fn save_approved_accommodation(
        &self,
        approved: &ApprovedAccommodation,
    ) -> Result<(), AppError> {
        self.set_json(keys::APPROVED_ACCOMMODATION, approved).await
    }

    async fn user_status(&self) -> Result<UserStatus, AppError> {
        Ok(self
            .get_json(keys::USER_STATUS)
            .await?
            .unwrap_or_default())
    }

    async fn save_user_status(&self, status: UserStatus) -> Result<(), AppError> {
        self.set_json(keys::USER_STATUS, &status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn unwritten_pool_reads_as_none_and_status_defaults() {
        let store = StoreClient::new(Arc::new(MemoryStore::default()));
        assert_eq!(store.load_offers().await.unwrap(), None);
        assert_eq!(store.user_status().await.unwrap(), UserStatus::Searching);

        store.save_user_status(UserStatus::Applied).await.unwrap();
        assert_eq!(store.user_status().await.unwrap(), UserStatus::Applied);
    }
}
