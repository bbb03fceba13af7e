//! Channel DTOs

use serde::{Deserialize, Serialize};

use crate::domain::channel::ChannelKind;

/// Insert body for the `channels` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChannel {
    pub server_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
}
