//! User domain types
//!
//! The authentication identity (`AuthUser`) and the user-facing profile (`User`)
//! are separate records on the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile row from the `users` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Authenticated identity as issued by the backend auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "authenticated".to_string()
}

/// Best display name for a signed-in user: nickname, then email, then "User"
pub fn display_name(user: Option<&AuthUser>, profile: Option<&User>) -> String {
    profile
        .map(|p| p.nickname.as_str())
        .filter(|n| !n.is_empty())
        .or_else(|| user.map(|u| u.email.as_str()).filter(|e| !e.is_empty()))
        .unwrap_or("User")
        .to_string()
}

/// Avatar placeholder letter: first letter of the nickname, else of the email, else '?'
pub fn avatar_initial(user: Option<&AuthUser>, profile: Option<&User>) -> char {
    profile
        .and_then(|p| p.nickname.chars().next())
        .or_else(|| user.and_then(|u| u.email.chars().next()))
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or('?')
}
