//! Backend seam for the state layer
//!
//! The session and chat-layout state containers only talk to the backend
//! through [`ChatBackend`]. [`EnloeClient`] is the HTTP implementation;
//! tests substitute an in-memory one.

use async_trait::async_trait;
use enloe_core::domain::channel::Channel;
use enloe_core::domain::message::Message;
use enloe_core::domain::server::Server;
use enloe_core::domain::user::User;
use enloe_core::dto::auth::{AuthSession, Credentials, CurrentUser, ProfileUpdate};

use crate::EnloeClient;
use crate::error::Result;

/// Backend operations used by the chat state containers
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Register a new account and start a session
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthSession>;

    /// Start a session with email and password
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession>;

    /// Identity and profile of the current session
    async fn current_user(&self) -> Result<CurrentUser>;

    /// Update the current user's profile
    async fn set_profile(&self, update: &ProfileUpdate) -> Result<User>;

    /// End the current session
    async fn sign_out(&self) -> Result<()>;

    /// Servers the user belongs to
    async fn user_servers(&self, user_id: &str) -> Result<Vec<Server>>;

    /// Channels of a server
    async fn server_channels(&self, server_id: &str) -> Result<Vec<Channel>>;

    /// Most recent messages of a channel, newest first
    async fn channel_messages(&self, channel_id: &str, limit: usize) -> Result<Vec<Message>>;
}

#[async_trait]
impl ChatBackend for EnloeClient {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthSession> {
        EnloeClient::sign_up(self, credentials).await
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession> {
        self.sign_in_with_password(credentials).await
    }

    async fn current_user(&self) -> Result<CurrentUser> {
        self.get_current_user().await
    }

    async fn set_profile(&self, update: &ProfileUpdate) -> Result<User> {
        EnloeClient::set_profile(self, update).await
    }

    async fn sign_out(&self) -> Result<()> {
        EnloeClient::sign_out(self).await
    }

    async fn user_servers(&self, user_id: &str) -> Result<Vec<Server>> {
        self.get_user_servers(user_id).await
    }

    async fn server_channels(&self, server_id: &str) -> Result<Vec<Channel>> {
        self.get_server_channels(server_id).await
    }

    async fn channel_messages(&self, channel_id: &str, limit: usize) -> Result<Vec<Message>> {
        self.get_channel_messages(channel_id, limit).await
    }
}
