use chrono::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Apartment,
    Studio,
    SharedHouse,
    Residence, // university-run hall
    Ensuite,
    Cottage,
}

impl PropertyKind {
    pub fn to_str(&self) -> &str {
        match self {
            PropertyKind::Apartment => "apartment",
            PropertyKind::Studio => "studio",
            PropertyKind::SharedHouse => "shared_house",
            PropertyKind::Residence => "residence",
            PropertyKind::Ensuite => "ensuite",
            PropertyKind::Cottage => "cottage",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ListingFeatures {
    pub furnished: bool,
    pub parking: bool,
    pub pet_friendly: bool,
    pub bedrooms: i32,
    pub bathrooms: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Availability {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_in_date: Option<DateTime<Utc>>,
}

/// A single accommodation unit. Reference data built from the fixture set,
/// never mutated at runtime.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub kind: PropertyKind,

    /// Monthly rent in whole rand
    pub price: i64,

    pub amenities: Vec<String>,
    pub features: ListingFeatures,
    pub availability: Availability,

    pub location: String,
    pub university: String,
    pub rating: f32,
}
