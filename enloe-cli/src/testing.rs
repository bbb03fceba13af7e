//! In-memory backend for state tests

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use enloe_client::{ChatBackend, ClientError, Result};
use enloe_core::domain::channel::{Channel, ChannelKind};
use enloe_core::domain::message::{Message, MessageAuthor, MessageType};
use enloe_core::domain::server::Server;
use enloe_core::domain::user::{AuthUser, User};
use enloe_core::dto::auth::{AuthSession, Credentials, CurrentUser, ProfileUpdate};

/// Scriptable backend that records the operations it receives
#[derive(Default)]
pub struct FakeBackend {
    pub(crate) calls: Mutex<Vec<String>>,
    pub(crate) signed_in: Mutex<bool>,
    pub sign_in_error: Option<String>,
    pub sign_up_error: Option<String>,
    pub profile_error: Option<String>,
    pub sign_out_error: Option<String>,
    pub servers: Vec<Server>,
    pub servers_error: Option<String>,
    pub channels: HashMap<String, Vec<Channel>>,
    pub messages: Vec<Message>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a live session, as if a saved token were valid
    pub fn signed_in() -> Self {
        let backend = Self::default();
        *backend.signed_in.lock().unwrap() = true;
        backend
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn check(error: &Option<String>) -> Result<()> {
        match error {
            Some(message) => Err(ClientError::api_error(400, message.clone())),
            None => Ok(()),
        }
    }

    fn session(&self, email: &str) -> AuthSession {
        *self.signed_in.lock().unwrap() = true;
        AuthSession {
            user: auth_user(email),
            access_token: "token".to_string(),
        }
    }
}

#[async_trait]
impl ChatBackend for FakeBackend {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthSession> {
        self.record("sign_up");
        Self::check(&self.sign_up_error)?;
        Ok(self.session(&credentials.email))
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession> {
        self.record("sign_in");
        Self::check(&self.sign_in_error)?;
        Ok(self.session(&credentials.email))
    }

    async fn current_user(&self) -> Result<CurrentUser> {
        self.record("current_user");
        if !*self.signed_in.lock().unwrap() {
            return Err(ClientError::NotAuthenticated);
        }
        Self::check(&self.profile_error)?;
        Ok(CurrentUser {
            user: auth_user("ally@example.com"),
            profile: profile("ally"),
        })
    }

    async fn set_profile(&self, update: &ProfileUpdate) -> Result<User> {
        self.record("set_profile");
        Self::check(&self.profile_error)?;
        let mut updated = profile(update.nickname.as_deref().unwrap_or("ally"));
        updated.bio = update.bio.clone();
        updated.avatar_url = update.avatar_url.clone();
        Ok(updated)
    }

    async fn sign_out(&self) -> Result<()> {
        self.record("sign_out");
        *self.signed_in.lock().unwrap() = false;
        Self::check(&self.sign_out_error)
    }

    async fn user_servers(&self, user_id: &str) -> Result<Vec<Server>> {
        self.record(format!("user_servers:{}", user_id));
        Self::check(&self.servers_error)?;
        Ok(self.servers.clone())
    }

    async fn server_channels(&self, server_id: &str) -> Result<Vec<Channel>> {
        self.record(format!("server_channels:{}", server_id));
        Ok(self.channels.get(server_id).cloned().unwrap_or_default())
    }

    async fn channel_messages(&self, channel_id: &str, limit: usize) -> Result<Vec<Message>> {
        self.record(format!("channel_messages:{}:{}", channel_id, limit));
        Ok(self
            .messages
            .iter()
            .filter(|m| m.channel_id == channel_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

pub fn auth_user(email: &str) -> AuthUser {
    AuthUser {
        id: "u1".to_string(),
        email: email.to_string(),
        role: "authenticated".to_string(),
    }
}

pub fn profile(nickname: &str) -> User {
    User {
        id: "u1".to_string(),
        nickname: nickname.to_string(),
        avatar_url: None,
        bio: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn server(id: &str, name: &str) -> Server {
    Server {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        owner_id: "u1".to_string(),
        icon_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn channel(id: &str, server_id: &str, name: &str) -> Channel {
    Channel {
        id: id.to_string(),
        server_id: server_id.to_string(),
        name: name.to_string(),
        kind: ChannelKind::Text,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Message posted `minute` minutes past noon
pub fn message(id: &str, channel_id: &str, content: &str, minute: u32) -> Message {
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 12, minute, 0).unwrap();
    Message {
        id: id.to_string(),
        channel_id: channel_id.to_string(),
        user_id: "u1".to_string(),
        content: Some(content.to_string()),
        message_type: MessageType::Text,
        file_url: None,
        created_at: at,
        edited_at: None,
        updated_at: at,
        author: Some(MessageAuthor {
            nickname: "ally".to_string(),
            avatar_url: None,
        }),
    }
}
