//! Message DTOs

use serde::{Deserialize, Serialize};

use crate::domain::message::MessageType;
use crate::validation::ValidationError;

/// Insert body for the `messages` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub channel_id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

impl NewMessage {
    pub fn text(channel_id: &str, user_id: &str, content: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.to_string(),
            user_id: user_id.to_string(),
            content: Some(content.into()),
            message_type: MessageType::Text,
            file_url: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_body(self.message_type, self.content.as_deref(), self.file_url.as_deref())
    }
}

/// A message needs text, or for images a file URL
pub(crate) fn validate_body(
    message_type: MessageType,
    content: Option<&str>,
    file_url: Option<&str>,
) -> Result<(), ValidationError> {
    let has_text = content.is_some_and(|c| !c.trim().is_empty());
    let has_file = file_url.is_some_and(|u| !u.is_empty());
    match message_type {
        MessageType::Text if has_text => Ok(()),
        MessageType::Image if has_file => Ok(()),
        _ => Err(ValidationError::EmptyMessage),
    }
}
