// src/service/search_service.rs
use std::sync::Arc;

use crate::dtos::searchdtos::{
    AvailabilityFilter, FurnishedFilter, SearchFilters, SortOption,
};
use crate::error::AppError;
use crate::models::listingmodel::Listing;
use crate::store::client::StoreClient;
use crate::store::searchdb::SearchPrefsExt;

const SUGGESTION_LIMIT: usize = 8;

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Linear scan, predicate-ANDing every enabled dimension. Price bounds are
/// inclusive; type/location/university match any requested value by
/// case-insensitive substring; every requested amenity must be present.
pub fn matches_filters(listing: &Listing, filters: &SearchFilters) -> bool {
    if listing.price < filters.price_range.min || listing.price > filters.price_range.max {
        return false;
    }

    if !filters.property_types.is_empty()
        && !filters
            .property_types
            .iter()
            .any(|t| contains_ci(listing.kind.to_str(), t))
    {
        return false;
    }

    if !filters.locations.is_empty()
        && !filters.locations.iter().any(|l| contains_ci(&listing.location, l))
    {
        return false;
    }

    if !filters.universities.is_empty()
        && !filters
            .universities
            .iter()
            .any(|u| contains_ci(&listing.university, u))
    {
        return false;
    }

    if !filters.amenities.iter().all(|wanted| {
        listing.amenities.iter().any(|have| contains_ci(have, wanted))
    }) {
        return false;
    }

    match filters.availability {
        AvailabilityFilter::Any => {}
        AvailabilityFilter::Available => {
            if !listing.availability.available {
                return false;
            }
        }
        AvailabilityFilter::Soon => {
            // Not open today, but a move-in date is on the calendar
            if listing.availability.available || listing.availability.move_in_date.is_none() {
                return false;
            }
        }
    }

    match filters.furnished {
        FurnishedFilter::Any => {}
        FurnishedFilter::Furnished => {
            if !listing.features.furnished {
                return false;
            }
        }
        FurnishedFilter::Unfurnished => {
            if listing.features.furnished {
                return false;
            }
        }
    }

    if let Some(parking) = filters.parking {
        if listing.features.parking != parking {
            return false;
        }
    }

    if let Some(pet_friendly) = filters.pet_friendly {
        if listing.features.pet_friendly != pet_friendly {
            return false;
        }
    }

    true
}

pub fn apply_filters(listings: &[Listing], filters: &SearchFilters) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| matches_filters(l, filters))
        .cloned()
        .collect()
}

/// Case-insensitive substring match across title, subtitle, location,
/// university and amenities. An empty query matches everything.
pub fn matches_query(listing: &Listing, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    contains_ci(&listing.title, query)
        || contains_ci(&listing.subtitle, query)
        || contains_ci(&listing.location, query)
        || contains_ci(&listing.university, query)
        || listing.amenities.iter().any(|a| contains_ci(a, query))
}

pub fn apply_query(listings: &[Listing], query: &str) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| matches_query(l, query))
        .cloned()
        .collect()
}

/// Stable ordering: available listings always group before unavailable ones,
/// then the selected key orders within each group. `Relevance` applies no
/// secondary key and preserves scan order.
pub fn sort_listings(mut listings: Vec<Listing>, sort: SortOption) -> Vec<Listing> {
    match sort {
        SortOption::Relevance => {
            listings.sort_by_key(|l| !l.availability.available);
        }
        SortOption::PriceAsc => {
            listings.sort_by(|a, b| {
                (!a.availability.available)
                    .cmp(&!b.availability.available)
                    .then(a.price.cmp(&b.price))
            });
        }
        SortOption::PriceDesc => {
            listings.sort_by(|a, b| {
                (!a.availability.available)
                    .cmp(&!b.availability.available)
                    .then(b.price.cmp(&a.price))
            });
        }
        SortOption::RatingDesc => {
            listings.sort_by(|a, b| {
                (!a.availability.available)
                    .cmp(&!b.availability.available)
                    .then(
                        b.rating
                            .partial_cmp(&a.rating)
                            .unwrap_or(std::cmp::Ordering::Equal),
                    )
            });
        }
    }
    listings
}

#[derive(Clone)]
pub struct SearchService {
    store: Arc<StoreClient>,
    listings: Arc<Vec<Listing>>,
}

impl SearchService {
    pub fn new(store: Arc<StoreClient>, listings: Vec<Listing>) -> Self {
        SearchService {
            store,
            listings: Arc::new(listings),
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn listing_by_id(&self, id: &str) -> Result<&Listing, AppError> {
        self.listings
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::ListingNotFound(id.to_string()))
    }

    /// The whole pipeline: free-text query, then filters, then ordering.
    /// No result caching; recomputed in full on every call.
    pub fn search(&self, query: &str, filters: &SearchFilters, sort: SortOption) -> Vec<Listing> {
        let matched = apply_query(&self.listings, query);
        let filtered = apply_filters(&matched, filters);
        sort_listings(filtered, sort)
    }

    pub async fn save_filters(&self, filters: &SearchFilters) -> Result<(), AppError> {
        self.store.save_filters(filters).await
    }

    pub async fn load_filters(&self) -> Result<SearchFilters, AppError> {
        self.store.load_filters().await
    }

    /// Record a committed search term and refresh the persisted suggestion
    /// pool from history plus listing titles, locations and universities.
    pub async fn record_search(&self, term: &str) -> Result<(), AppError> {
        let history = self.store.record_search_term(term).await?;
        let pool = self.build_suggestion_pool(&history);
        self.store.save_suggestion_pool(&pool).await
    }

    /// Predictive suggestions for a typed prefix, most recent searches first.
    pub async fn suggestions(&self, prefix: &str) -> Result<Vec<String>, AppError> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Ok(Vec::new());
        }

        let pool = match self.store.suggestion_pool().await? {
            Some(pool) => pool,
            None => {
                let history = self.store.search_history().await?;
                self.build_suggestion_pool(&history)
            }
        };

        let needle = prefix.to_lowercase();
        Ok(pool
            .into_iter()
            .filter(|entry| entry.to_lowercase().starts_with(&needle))
            .take(SUGGESTION_LIMIT)
            .collect())
    }

    pub async fn toggle_liked(&self, listing_id: &str) -> Result<bool, AppError> {
        // Unknown ids are rejected rather than silently stored
        self.listing_by_id(listing_id)?;
        self.store.toggle_liked(listing_id).await
    }

    pub async fn liked_listings(&self) -> Result<Vec<Listing>, AppError> {
        let liked = self.store.liked_ids().await?;
        Ok(self
            .listings
            .iter()
            .filter(|l| liked.contains(&l.id))
            .cloned()
            .collect())
    }

    fn build_suggestion_pool(&self, history: &[String]) -> Vec<String> {
        let mut pool: Vec<String> = Vec::new();
        let mut push = |entry: &str| {
            if !pool.iter().any(|e| e.eq_ignore_ascii_case(entry)) {
                pool.push(entry.to_string());
            }
        };

        for term in history {
            push(term);
        }
        for listing in self.listings.iter() {
            push(&listing.title);
            push(&listing.location);
            push(&listing.university);
        }
        pool
    }
}
