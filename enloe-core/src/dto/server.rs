//! Server DTOs

use serde::{Deserialize, Serialize};

use crate::domain::server::{MemberRole, Server};

/// Insert body for the `servers` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewServer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner_id: String,
}

/// Insert body for the `server_members` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMembership {
    pub server_id: String,
    pub user_id: String,
    pub role: MemberRole,
}

impl NewMembership {
    /// The creator's membership of a freshly created server
    pub fn owner(server_id: &str, owner_id: &str) -> Self {
        Self::with_role(server_id, owner_id, MemberRole::Admin)
    }

    /// A user joining an existing server
    pub fn member(server_id: &str, user_id: &str) -> Self {
        Self::with_role(server_id, user_id, MemberRole::Member)
    }

    fn with_role(server_id: &str, user_id: &str, role: MemberRole) -> Self {
        Self {
            server_id: server_id.to_string(),
            user_id: user_id.to_string(),
            role,
        }
    }
}

/// Row shape of `server_members` selected with the `servers!inner(*)` embed
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipWithServer {
    pub servers: Server,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_admin() {
        let owner = NewMembership::owner("s1", "u1");
        assert_eq!(owner.role, MemberRole::Admin);
        assert_eq!(owner.user_id, "u1");

        assert_eq!(NewMembership::member("s1", "u2").role, MemberRole::Member);
    }

    #[test]
    fn test_membership_row_with_embedded_server() {
        let body = r#"[
            {
                "servers": {
                    "id": "s1",
                    "name": "Rustaceans",
                    "owner_id": "u1",
                    "created_at": "2025-01-02T12:00:00Z",
                    "updated_at": "2025-01-02T12:00:00Z"
                }
            },
            {
                "servers": {
                    "id": "s2",
                    "name": "Gophers",
                    "description": "go talk",
                    "owner_id": "u2",
                    "icon_url": null,
                    "created_at": "2025-01-03T08:30:00+00:00",
                    "updated_at": "2025-01-03T08:30:00+00:00"
                }
            }
        ]"#;

        let rows: Vec<MembershipWithServer> = serde_json::from_str(body).unwrap();
        let servers: Vec<Server> = rows.into_iter().map(|row| row.servers).collect();

        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].name, "Rustaceans");
        assert!(servers[0].description.is_none());
        assert_eq!(servers[1].description.as_deref(), Some("go talk"));
        assert!(servers[1].icon_url.is_none());
    }
}
