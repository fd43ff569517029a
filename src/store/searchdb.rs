// store/searchdb.rs
use async_trait::async_trait;

use super::client::StoreClient;
use super::keys;
use crate::dtos::searchdtos::SearchFilters;
use crate::error::AppError;

/// Recent searches are capped; oldest entries fall off the end.
pub const SEARCH_HISTORY_LIMIT: usize = 20;

#[async_trait]
pub trait SearchPrefsExt {
    async fn save_filters(&self, filters: &SearchFilters) -> Result<(), AppError>;

    /// Missing key reads back as the wide-open default.
    async fn load_filters(&self) -> Result<SearchFilters, AppError>;

    /// Push a search term to the front of the history, deduplicating
    /// case-insensitively and trimming to the cap.
    async fn record_search_term(&self, term: &str) -> Result<Vec<String>, AppError>;

    async fn search_history(&self) -> Result<Vec<String>, AppError>;

    async fn save_suggestion_pool(&self, pool: &[String]) -> Result<(), AppError>;

    async fn suggestion_pool(&self) -> Result<Option<Vec<String>>, AppError>;

    /// Toggle a listing in the liked set; returns whether it is liked now.
    async fn toggle_liked(&self, listing_id: &str) -> Result<bool, AppError>;

    async fn liked_ids(&self) -> Result<Vec<String>, AppError>;
}

#[async_trait]
impl SearchPrefsExt for StoreClient {
    async fn save_filters(&self, filters: &SearchFilters) -> Result<(), AppError> {
        self.set_json(keys::SEARCH_FILTERS, filters).await
    }

    async fn load_filters(&self) -> Result<SearchFilters, AppError> {
        Ok(self
            .get_json(keys::SEARCH_FILTERS)
            .await?
            .unwrap_or_default())
    }

    async fn record_search_term(&self, term: &str) -> Result<Vec<String>, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return self.search_history().await;
        }

        let mut history: Vec<String> = self
            .get_json(keys::SEARCH_HISTORY)
            .await?
            .unwrap_or_default();
        history.retain(|t| !t.eq_ignore_ascii_case(term));
        history.insert(0, term.to_string());
        history.truncate(SEARCH_HISTORY_LIMIT);

        self.set_json(keys::SEARCH_HISTORY, &history).await?;
        Ok(history)
    }

    async fn search_history(&self) -> Result<Vec<String>, AppError> {
        Ok(self
            .get_json(keys::SEARCH_HISTORY)
            .await?
            .unwrap_or_default())
    }

    async fn save_suggestion_pool(&self, pool: &[String]) -> Result<(), AppError> {
        self.set_json(keys::SEARCH_SUGGESTIONS, &pool).await
    }

    async fn suggestion_pool(&self) -> Result<Option<Vec<String>>, AppError> {
        self.get_json(keys::SEARCH_SUGGESTIONS).await
    }

    async fn toggle_liked(&self, listing_id: &str) -> Result<bool, AppError> {
        let mut liked: Vec<String> = self
            .get_json(keys::LIKED_PROPERTIES)
            .await?
            .unwrap_or_default();

        let now_liked = if let Some(pos) = liked.iter().position(|id| id == listing_id) {
            liked.remove(pos);
            false
        } else {
            liked.push(listing_id.to_string());
            true
        };

        self.set_json(keys::LIKED_PROPERTIES, &liked).await?;
        Ok(now_liked)
    }

    async fn liked_ids(&self) -> Result<Vec<String>, AppError> {
        Ok(self
            .get_json(keys::LIKED_PROPERTIES)
            .await?
            .unwrap_or_default())
    }
}
