use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Resident,
    Host,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub body: String,
    pub sender: Sender,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

/// An ordered message thread between the resident and one host, keyed by
/// property and contact name.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Conversation {
    pub id: String,
    pub contact_name: String,
    pub property_id: String,
    pub messages: Vec<Message>,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub unread_count: u32,
    pub is_archived: bool,
}

/// Deterministic thread id: lower-cased, whitespace collapsed to underscores.
/// The same (property, contact) pair always lands in the same thread.
pub fn conversation_id(property_id: &str, contact_name: &str) -> String {
    let slug = contact_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{}_{}", property_id.to_lowercase(), slug)
}
