// store/chatdb.rs
use async_trait::async_trait;

use super::client::StoreClient;
use super::keys;
use crate::error::AppError;
use crate::models::chatmodel::Conversation;

#[async_trait]
pub trait ConversationExt {
    /// Every stored thread, most recent activity first.
    async fn load_conversations(&self) -> Result<Vec<Conversation>, AppError>;

    /// Persists the whole list, re-sorting by last activity on every save.
    async fn save_conversations(&self, conversations: Vec<Conversation>)
        -> Result<(), AppError>;

    async fn get_conversation(&self, id: &str) -> Result<Option<Conversation>, AppError>;
}

#[async_trait]
impl ConversationExt for StoreClient {
    async fn load_conversations(&self) -> Result<Vec<Conversation>, AppError> {
        let conversations: Vec<Conversation> = self
            .get_json(keys::DM_CONVERSATIONS)
            .await?
            .unwrap_or_default();
        Ok(conversations)
    }

    async fn save_conversations(
        &self,
        mut conversations: Vec<Conversation>,
    ) -> Result<(), AppError> {
        conversations.sort_by(|a, b| b.last_message_time.cmp(&a.last_message_time));
        self.set_json(keys::DM_CONVERSATIONS, &conversations).await
    }

    async fn get_conversation(&self, id: &str) -> Result<Option<Conversation>, AppError> {
        let conversations = self.load_conversations().await?;
        Ok(conversations.into_iter().find(|c| c.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    fn conversation(id: &str, minutes_ago: i64) -> Conversation {
        let at = Utc::now() - Duration::minutes(minutes_ago);
        Conversation {
            id: id.to_string(),
            contact_name: "Host".to_string(),
            property_id: "p1".to_string(),
            messages: Vec::new(),
            last_message: String::new(),
            last_message_time: at,
            unread_count: 0,
            is_archived: false,
        }
    }

    #[tokio::test]
    async fn save_orders_by_last_activity_descending() {
        let store = StoreClient::new(Arc::new(MemoryStore::default()));
        store
            .save_conversations(vec![
                conversation("old", 90),
                conversation("new", 1),
                conversation("mid", 30),
            ])
            .await
            .unwrap();

        let listed = store.load_conversations().await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);

        assert!(store.get_conversation("mid").await.unwrap().is_some());
        assert!(store.get_conversation("missing").await.unwrap().is_none());
    }
}
