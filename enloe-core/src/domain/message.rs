//! Message domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row from the `messages` table
///
/// When fetched with the author embed the backend nests the author's
/// profile columns under `users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub channel_id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "users", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<MessageAuthor>,
}

/// Author columns embedded in a message fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAuthor {
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Kind of message body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    Image,
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::Text => write!(f, "text"),
            MessageType::Image => write!(f, "image"),
        }
    }
}

/// Text to show for a message body: its content, else its file URL
pub fn body_text(content: Option<&str>, file_url: Option<&str>) -> String {
    match (content.filter(|c| !c.is_empty()), file_url) {
        (Some(content), Some(url)) => format!("{} [{}]", content, url),
        (Some(content), None) => content.to_string(),
        (None, Some(url)) => format!("[{}]", url),
        (None, None) => String::new(),
    }
}

impl Message {
    /// Name to show next to the message
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.nickname.as_str())
            .unwrap_or(&self.user_id)
    }

    pub fn body(&self) -> String {
        body_text(self.content.as_deref(), self.file_url.as_deref())
    }
}
