//! Auth-related API endpoints

use enloe_core::domain::user::{AuthUser, User};
use enloe_core::dto::auth::{AuthSession, Credentials, CurrentUser, ProfileUpdate};
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::EnloeClient;
use crate::error::{ClientError, Result};

/// Body of `GET /api/auth/sessions/current`
#[derive(Debug, Deserialize)]
struct CurrentSession {
    user: AuthUser,
}

impl EnloeClient {
    // =============================================================================
    // Sessions
    // =============================================================================

    /// Register a new account
    ///
    /// On success the returned access token is installed on this client.
    ///
    /// # Example
    /// ```no_run
    /// # use enloe_client::EnloeClient;
    /// # use enloe_core::dto::auth::Credentials;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = EnloeClient::new("http://localhost:7130");
    /// let session = client
    ///     .sign_up(&Credentials::new("ally@example.com", "hunter22"))
    ///     .await?;
    /// assert!(client.is_authenticated());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<AuthSession> {
        let response = self
            .request(Method::POST, "/api/auth/users")
            .json(credentials)
            .send()
            .await?;

        let session: AuthSession = self.handle_response(response).await?;
        self.set_access_token(session.access_token.clone());
        debug!("Signed up as {}", session.user.email);
        Ok(session)
    }

    /// Sign in with email and password
    ///
    /// On success the returned access token is installed on this client.
    pub async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<AuthSession> {
        let response = self
            .request(Method::POST, "/api/auth/sessions")
            .json(credentials)
            .send()
            .await?;

        let session: AuthSession = self.handle_response(response).await?;
        self.set_access_token(session.access_token.clone());
        debug!("Signed in as {}", session.user.email);
        Ok(session)
    }

    /// Identity and profile of the signed-in user
    ///
    /// Fails with [`ClientError::NotAuthenticated`] without contacting the
    /// backend when no token is held.
    pub async fn get_current_user(&self) -> Result<CurrentUser> {
        if !self.is_authenticated() {
            return Err(ClientError::NotAuthenticated);
        }

        let response = self
            .request(Method::GET, "/api/auth/sessions/current")
            .send()
            .await?;
        let CurrentSession { user } = self.handle_response(response).await?;

        let profile = self.get_profile(&user.id).await?;
        Ok(CurrentUser { user, profile })
    }

    /// Update the signed-in user's profile
    ///
    /// # Arguments
    /// * `update` - Fields to change; absent fields are left as they are
    pub async fn set_profile(&self, update: &ProfileUpdate) -> Result<User> {
        let response = self
            .request(Method::PATCH, "/api/auth/profiles/current")
            .json(update)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Sign out
    ///
    /// The local token is dropped whether or not the backend acknowledged
    /// the logout; the backend's error, if any, is still returned.
    pub async fn sign_out(&self) -> Result<()> {
        if !self.is_authenticated() {
            return Ok(());
        }

        let result = match self.request(Method::POST, "/api/auth/logout").send().await {
            Ok(response) => self.handle_empty_response(response).await,
            Err(e) => Err(e.into()),
        };
        self.clear_access_token();

        if let Err(e) = &result {
            warn!("Backend logout failed: {}", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_current_user_requires_token() {
        // Nothing listens here; the call must fail before connecting.
        let client = EnloeClient::new("http://127.0.0.1:9");
        let err = client.get_current_user().await.unwrap_err();
        assert!(matches!(err, ClientError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_sign_out_without_token_is_noop() {
        let client = EnloeClient::new("http://127.0.0.1:9");
        assert!(client.sign_out().await.is_ok());
    }

    #[tokio::test]
    async fn test_sign_out_clears_token_even_when_backend_unreachable() {
        let client = EnloeClient::new("http://127.0.0.1:9");
        client.set_access_token("tok");
        let _ = client.sign_out().await;
        assert!(!client.is_authenticated());
    }
}
