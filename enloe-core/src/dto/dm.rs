//! Direct message DTOs

use serde::{Deserialize, Serialize};

use crate::domain::message::MessageType;
use crate::dto::message::validate_body;
use crate::validation::ValidationError;

/// Insert body for the `dm_channels` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDmChannel {
    pub participant1_id: String,
    pub participant2_id: String,
}

/// Insert body for the `dm_messages` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDmMessage {
    pub dm_channel_id: String,
    pub sender_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

impl NewDmMessage {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_body(self.message_type, self.content.as_deref(), self.file_url.as_deref())
    }
}
