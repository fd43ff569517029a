//! Seed offer pool, written to the store on first access.

use chrono::{Duration, Utc};

use crate::models::offermodel::{AccommodationOffer, OfferStatus};

pub fn seed_offers() -> Vec<AccommodationOffer> {
    let now = Utc::now();
    vec![
        AccommodationOffer {
            id: "offer-1".to_string(),
            property_id: "p1".to_string(),
            property_name: "Obz Square Student Studios".to_string(),
            room_type: "Single studio".to_string(),
            monthly_rent: 5200,
            move_in_date: now + Duration::days(30),
            expires_at: now + Duration::days(7),
            status: OfferStatus::Pending,
        },
        AccommodationOffer {
            id: "offer-2".to_string(),
            property_id: "p3".to_string(),
            property_name: "Hatfield Heights".to_string(),
            room_type: "En-suite room".to_string(),
            monthly_rent: 4700,
            move_in_date: now + Duration::days(45),
            expires_at: now + Duration::days(10),
            status: OfferStatus::Pending,
        },
        AccommodationOffer {
            id: "offer-3".to_string(),
            property_id: "p6".to_string(),
            property_name: "Summerstrand Surf Residence".to_string(),
            room_type: "Shared double".to_string(),
            monthly_rent: 3200,
            move_in_date: now + Duration::days(21),
            expires_at: now + Duration::days(5),
            status: OfferStatus::Pending,
        },
    ]
}
