// src/service/chat_service.rs
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::chatmodel::{conversation_id, Conversation, Message, Sender};
use crate::store::chatdb::ConversationExt;
use crate::store::client::StoreClient;

/// First host message seeded into a brand-new thread.
const WELCOME_POOL: [&str; 5] = [
    "Hi! Thanks for reaching out about the listing. How can I help?",
    "Hello! Happy to answer any questions about the place.",
    "Hi there! Are you looking to view the room or ask about availability?",
    "Thanks for your interest! Let me know what you'd like to know.",
    "Hello! The listing is still open - feel free to ask anything.",
];

fn pick_welcome() -> &'static str {
    let idx = rand::rng().random_range(0..WELCOME_POOL.len());
    WELCOME_POOL[idx]
}

#[derive(Clone)]
pub struct ChatService {
    store: Arc<StoreClient>,
}

impl ChatService {
    pub fn new(store: Arc<StoreClient>) -> Self {
        ChatService { store }
    }

    /// Send a resident message to a host. First contact creates the thread
    /// and seeds a host welcome; later messages append.
    pub async fn send_message(
        &self,
        property_id: &str,
        contact_name: &str,
        body: &str,
    ) -> Result<Conversation, AppError> {
        let id = conversation_id(property_id, contact_name);
        let now = Utc::now();
        let mut conversations = self.store.load_conversations().await?;

        let position = match conversations.iter().position(|c| c.id == id) {
            Some(pos) => pos,
            None => {
                let welcome = Message {
                    id: Uuid::new_v4(),
                    body: pick_welcome().to_string(),
                    sender: Sender::Host,
                    sent_at: now,
                    read: false,
                };
                conversations.push(Conversation {
                    id: id.clone(),
                    contact_name: contact_name.to_string(),
                    property_id: property_id.to_string(),
                    last_message: welcome.body.clone(),
                    last_message_time: now,
                    unread_count: 1,
                    is_archived: false,
                    messages: vec![welcome],
                });
                conversations.len() - 1
            }
        };
        let conversation = &mut conversations[position];

        conversation.messages.push(Message {
            id: Uuid::new_v4(),
            body: body.to_string(),
            sender: Sender::Resident,
            sent_at: now,
            read: true,
        });
        conversation.last_message = body.to_string();
        conversation.last_message_time = now;

        let snapshot = conversation.clone();
        self.store.save_conversations(conversations).await?;
        Ok(snapshot)
    }

    /// Append a host message to an existing thread, bumping the unread count.
    pub async fn append_host_message(
        &self,
        conversation_id: &str,
        body: &str,
    ) -> Result<Conversation, AppError> {
        let mut conversations = self.store.load_conversations().await?;
        let conversation = conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| AppError::ConversationNotFound(conversation_id.to_string()))?;

        let now = Utc::now();
        conversation.messages.push(Message {
            id: Uuid::new_v4(),
            body: body.to_string(),
            sender: Sender::Host,
            sent_at: now,
            read: false,
        });
        conversation.last_message = body.to_string();
        conversation.last_message_time = now;
        conversation.unread_count += 1;

        let snapshot = conversation.clone();
        self.store.save_conversations(conversations).await?;
        Ok(snapshot)
    }

    pub async fn mark_read(&self, conversation_id: &str) -> Result<(), AppError> {
        let mut conversations = self.store.load_conversations().await?;
        let conversation = conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| AppError::ConversationNotFound(conversation_id.to_string()))?;

        conversation.unread_count = 0;
        for message in &mut conversation.messages {
            message.read = true;
        }
        self.store.save_conversations(conversations).await
    }

    pub async fn set_archived(
        &self,
        conversation_id: &str,
        archived: bool,
    ) -> Result<(), AppError> {
        let mut conversations = self.store.load_conversations().await?;
        let conversation = conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| AppError::ConversationNotFound(conversation_id.to_string()))?;

        conversation.is_archived = archived;
        self.store.save_conversations(conversations).await
    }

    pub async fn delete(&self, conversation_id: &str) -> Result<(), AppError> {
        let mut conversations = self.store.load_conversations().await?;
        let before = conversations.len();
        conversations.retain(|c| c.id != conversation_id);
        if conversations.len() == before {
            return Err(AppError::ConversationNotFound(conversation_id.to_string()));
        }
        self.store.save_conversations(conversations).await
    }

    /// All threads, most recent activity first.
    pub async fn conversations(&self) -> Result<Vec<Conversation>, AppError> {
        self.store.load_conversations().await
    }

    /// Unread messages across unarchived threads, for the inbox badge.
    pub async fn total_unread(&self) -> Result<u32, AppError> {
        let conversations = self.store.load_conversations().await?;
        Ok(conversations
            .iter()
            .filter(|c| !c.is_archived)
            .map(|c| c.unread_count)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;

    fn service() -> ChatService {
        ChatService::new(Arc::new(StoreClient::new(Arc::new(MemoryStore::default()))))
    }

    #[tokio::test]
    async fn first_message_seeds_a_welcome() {
        let svc = service();
        let conversation = svc.send_message("p1", "Host A", "Hello").await.unwrap();

        assert_eq!(conversation.id, "p1_host_a");
        assert_eq!(conversation.messages.len(), 2);
        assert_eq!(conversation.messages[0].sender, Sender::Host);
        assert!(WELCOME_POOL.contains(&conversation.messages[0].body.as_str()));
        assert_eq!(conversation.messages[1].sender, Sender::Resident);
        assert_eq!(conversation.last_message, "Hello");
        assert_eq!(conversation.unread_count, 1);

        let listed = svc.conversations().await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn later_messages_append_to_the_same_thread() {
        let svc = service();
        svc.send_message("p1", "Host A", "Hello").await.unwrap();
        let conversation = svc
            .send_message("p1", "host a", "Is the room still open?")
            .await
            .unwrap();

        assert_eq!(conversation.messages.len(), 3);
        assert_eq!(conversation.last_message, "Is the room still open?");
        assert_eq!(svc.conversations().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn host_messages_bump_unread_and_mark_read_clears_it() {
        let svc = service();
        let conversation = svc.send_message("p1", "Host A", "Hello").await.unwrap();
        svc.append_host_message(&conversation.id, "Yes, come view on Friday")
            .await
            .unwrap();

        assert_eq!(svc.total_unread().await.unwrap(), 2);

        svc.mark_read(&conversation.id).await.unwrap();
        assert_eq!(svc.total_unread().await.unwrap(), 0);
        let listed = svc.conversations().await.unwrap();
        assert!(listed[0].messages.iter().all(|m| m.read));
    }

    #[tokio::test]
    async fn threads_list_by_most_recent_activity() {
        let svc = service();
        svc.send_message("p1", "Host A", "Hello").await.unwrap();
        svc.send_message("p2", "Host B", "Hi").await.unwrap();
        svc.send_message("p1", "Host A", "Still there?").await.unwrap();

        let listed = svc.conversations().await.unwrap();
        assert_eq!(listed[0].id, "p1_host_a");
        assert_eq!(listed[1].id, "p2_host_b");
    }

    #[tokio::test]
    async fn archived_threads_leave_the_badge_count() {
        let svc = service();
        let a = svc.send_message("p1", "Host A", "Hello").await.unwrap();
        svc.send_message("p2", "Host B", "Hi").await.unwrap();
        assert_eq!(svc.total_unread().await.unwrap(), 2);

        svc.set_archived(&a.id, true).await.unwrap();
        assert_eq!(svc.total_unread().await.unwrap(), 1);

        svc.set_archived(&a.id, false).await.unwrap();
        assert_eq!(svc.total_unread().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn delete_removes_the_thread() {
        let svc = service();
        let conversation = svc.send_message("p1", "Host A", "Hello").await.unwrap();
        svc.delete(&conversation.id).await.unwrap();
        assert!(svc.conversations().await.unwrap().is_empty());
        assert!(matches!(
            svc.delete(&conversation.id).await,
            Err(AppError::ConversationNotFound(_))
        ));
    }
}
