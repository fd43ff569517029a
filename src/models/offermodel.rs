use chrono::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Declined,
}

impl OfferStatus {
    pub fn to_str(&self) -> &str {
        match self {
            OfferStatus::Pending => "pending",
            OfferStatus::Accepted => "accepted",
            OfferStatus::Declined => "declined",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Searching,
    Applied,
    Approved,
}

impl UserStatus {
    pub fn to_str(&self) -> &str {
        match self {
            UserStatus::Searching => "searching",
            UserStatus::Applied => "applied",
            UserStatus::Approved => "approved",
        }
    }
}

/// A host-issued proposal of a specific room to the resident.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AccommodationOffer {
    pub id: String,
    pub property_id: String,
    pub property_name: String,
    pub room_type: String,
    pub monthly_rent: i64,
    pub move_in_date: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub status: OfferStatus,
}

/// Snapshot of an accepted offer. Written once on acceptance.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApprovedAccommodation {
    pub offer_id: String,
    pub property_id: String,
    pub property_name: String,
    pub room_type: String,
    pub monthly_rent: i64,
    pub move_in_date: DateTime<Utc>,
    pub accepted_at: DateTime<Utc>,
}

impl ApprovedAccommodation {
    pub fn from_offer(offer: &AccommodationOffer, accepted_at: DateTime<Utc>) -> Self {
        ApprovedAccommodation {
            offer_id: offer.id.clone(),
            property_id: offer.property_id.clone(),
            property_name: offer.property_name.clone(),
            room_type: offer.room_type.clone(),
            monthly_rent: offer.monthly_rent,
            move_in_date: offer.move_in_date,
            accepted_at,
        }
    }
}
