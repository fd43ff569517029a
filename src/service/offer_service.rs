// src/service/offer_service.rs
use std::sync::Arc;

use chrono::Utc;

use crate::data::offers::seed_offers;
use crate::error::AppError;
use crate::models::offermodel::{
    AccommodationOffer, ApprovedAccommodation, OfferStatus, UserStatus,
};
use crate::store::client::StoreClient;
use crate::store::offerdb::OfferExt;

#[derive(Clone)]
pub struct OfferService {
    store: Arc<StoreClient>,
}

impl OfferService {
    pub fn new(store: Arc<StoreClient>) -> Self {
        OfferService { store }
    }

    /// The offer pool. First access seeds the fixture offers.
    pub async fn offers(&self) -> Result<Vec<AccommodationOffer>, AppError> {
        match self.store.load_offers().await? {
            Some(offers) => Ok(offers),
            None => {
                let seeded = seed_offers();
                self.store.save_offers(&seeded).await?;
                tracing::debug!("Seeded {} accommodation offers", seeded.len());
                Ok(seeded)
            }
        }
    }

    /// Accept a pending offer. Three sequential writes with no atomicity
    /// across them; the approved snapshot lands first so a failure part-way
    /// never leaves an accepted offer without its accommodation record.
    pub async fn accept_offer(&self, offer_id: &str) -> Result<ApprovedAccommodation, AppError> {
        if self.store.approved_accommodation().await?.is_some() {
            return Err(AppError::OfferAlreadyAccepted);
        }

        let mut offers = self.offers().await?;
        let offer = offers
            .iter_mut()
            .find(|o| o.id == offer_id)
            .ok_or_else(|| AppError::OfferNotFound(offer_id.to_string()))?;
        if offer.status != OfferStatus::Pending {
            return Err(AppError::OfferNotPending(offer_id.to_string()));
        }

        let approved = ApprovedAccommodation::from_offer(offer, Utc::now());
        offer.status = OfferStatus::Accepted;

        self.store.save_approved_accommodation(&approved).await?;
        self.store.save_offers(&offers).await?;
        self.store.save_user_status(UserStatus::Approved).await?;

        tracing::info!("Offer {} accepted ({})", offer_id, approved.property_name);
        Ok(approved)
    }

    /// Decline a pending offer. Touches nothing but that offer's status.
    pub async fn decline_offer(&self, offer_id: &str) -> Result<(), AppError> {
        let mut offers = self.offers().await?;
        let offer = offers
            .iter_mut()
            .find(|o| o.id == offer_id)
            .ok_or_else(|| AppError::OfferNotFound(offer_id.to_string()))?;
        if offer.status != OfferStatus::Pending {
            return Err(AppError::OfferNotPending(offer_id.to_string()));
        }

        offer.status = OfferStatus::Declined;
        self.store.save_offers(&offers).await
    }

    pub async fn approved_accommodation(&self) -> Result<Option<ApprovedAccommodation>, AppError> {
        self.store.approved_accommodation().await
    }

    pub async fn user_status(&self) -> Result<UserStatus, AppError> {
        self.store.user_status().await
    }

    pub async fn set_user_status(&self, status: UserStatus) -> Result<(), AppError> {
        self.store.save_user_status(status).await
    }
}
