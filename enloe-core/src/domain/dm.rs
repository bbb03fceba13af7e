//! Direct message domain types
//!
//! A DM channel is a private thread between exactly two participants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::message::{MessageAuthor, MessageType, body_text};

/// Row from the `dm_channels` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmChannel {
    pub id: String,
    pub participant1_id: String,
    pub participant2_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DmChannel {
    /// Whether `user_id` is one of the two participants
    pub fn involves(&self, user_id: &str) -> bool {
        self.participant1_id == user_id || self.participant2_id == user_id
    }

    /// The participant that is not `me`
    ///
    /// For a thread with oneself both participants are the same id.
    pub fn other_participant(&self, me: &str) -> &str {
        if self.participant1_id == me {
            &self.participant2_id
        } else {
            &self.participant1_id
        }
    }
}

/// Row from the `dm_messages` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmMessage {
    pub id: String,
    pub dm_channel_id: String,
    pub sender_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "users", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<MessageAuthor>,
}

impl DmMessage {
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.nickname.as_str())
            .unwrap_or(&self.sender_id)
    }

    pub fn body(&self) -> String {
        body_text(self.content.as_deref(), self.file_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(p1: &str, p2: &str) -> DmChannel {
        DmChannel {
            id: "d1".to_string(),
            participant1_id: p1.to_string(),
            participant2_id: p2.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_other_participant() {
        let dm = channel("alice", "bob");
        assert_eq!(dm.other_participant("alice"), "bob");
        assert_eq!(dm.other_participant("bob"), "alice");
    }

    #[test]
    fn test_involves() {
        let dm = channel("alice", "bob");
        assert!(dm.involves("bob"));
        assert!(!dm.involves("carol"));
    }
}
