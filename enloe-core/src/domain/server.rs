//! Server domain model
//!
//! A server is a named community grouping channels. Membership lives in its
//! own table so a user's server list is a join over `server_members`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row from the `servers` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Server {
    /// Letter shown in place of a missing server icon
    pub fn icon_initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }
}

/// Row from the `server_members` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerMember {
    pub id: String,
    pub server_id: String,
    pub user_id: String,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role of a member within a server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Member,
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::Admin => write!(f, "admin"),
            MemberRole::Member => write!(f, "member"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_from_row() {
        let json = r#"{
            "id": "s1",
            "name": "rustaceans",
            "owner_id": "u1",
            "created_at": "2025-01-02T03:04:05.000Z",
            "updated_at": "2025-01-02T03:04:05+00:00"
        }"#;
        let server: Server = serde_json::from_str(json).unwrap();
        assert_eq!(server.name, "rustaceans");
        assert!(server.description.is_none());
        assert_eq!(server.icon_initial(), 'R');
    }

    #[test]
    fn test_member_role_wire_format() {
        assert_eq!(serde_json::to_string(&MemberRole::Admin).unwrap(), r#""admin""#);
        let role: MemberRole = serde_json::from_str(r#""member""#).unwrap();
        assert_eq!(role, MemberRole::Member);
    }
}
