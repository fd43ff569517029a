use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityFilter {
    #[default]
    Any,
    Available,
    Soon,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FurnishedFilter {
    #[default]
    Any,
    Furnished,
    Unfurnished,
}

/// User-chosen filter state. Mutated by interaction, persisted under
/// `search_filters`, durable across restarts.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct SearchFilters {
    #[validate(custom = "validate_price_range")]
    pub price_range: PriceRange,
    pub property_types: Vec<String>,
    pub locations: Vec<String>,
    pub universities: Vec<String>,
    pub amenities: Vec<String>,
    pub availability: AvailabilityFilter,
    pub furnished: FurnishedFilter,
    pub parking: Option<bool>,
    pub pet_friendly: Option<bool>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters {
            price_range: PriceRange { min: 0, max: 50_000 },
            property_types: Vec::new(),
            locations: Vec::new(),
            universities: Vec::new(),
            amenities: Vec::new(),
            availability: AvailabilityFilter::Any,
            furnished: FurnishedFilter::Any,
            parking: None,
            pet_friendly: None,
        }
    }
}

fn validate_price_range(range: &PriceRange) -> Result<(), validator::ValidationError> {
    if range.min < 0 || range.min > range.max {
        return Err(validator::ValidationError::new("invalid_price_range"));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Preserves scan order beyond the availability grouping.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}
