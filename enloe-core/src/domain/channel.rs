//! Channel domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row from the `channels` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub server_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Text or voice sub-space of a server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    #[default]
    Text,
    Voice,
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelKind::Text => write!(f, "text"),
            ChannelKind::Voice => write!(f, "voice"),
        }
    }
}

impl std::str::FromStr for ChannelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ChannelKind::Text),
            "voice" => Ok(ChannelKind::Voice),
            other => Err(format!("unknown channel type '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_type_column() {
        let json = r#"{
            "id": "c1",
            "server_id": "s1",
            "name": "general",
            "type": "voice",
            "created_at": "2025-01-02T03:04:05Z",
            "updated_at": "2025-01-02T03:04:05Z"
        }"#;
        let channel: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.kind, ChannelKind::Voice);

        let back = serde_json::to_value(&channel).unwrap();
        assert_eq!(back["type"], "voice");
    }

    #[test]
    fn test_channel_kind_from_str() {
        assert_eq!("Text".parse::<ChannelKind>().unwrap(), ChannelKind::Text);
        assert!("video".parse::<ChannelKind>().is_err());
    }
}
