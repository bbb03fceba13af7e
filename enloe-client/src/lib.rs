//! Enloe HTTP Client
//!
//! A type-safe client for the hosted backend that powers EnloeChat: auth,
//! table records and object storage, plus the typed chat services built on them.
//!
//! # Example
//!
//! ```no_run
//! use enloe_client::EnloeClient;
//! use enloe_core::dto::auth::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = EnloeClient::new("http://localhost:7130");
//!
//!     let session = client
//!         .sign_in_with_password(&Credentials::new("ally@example.com", "hunter22"))
//!         .await?;
//!
//!     for server in client.get_user_servers(&session.user.id).await? {
//!         println!("{}", server.name);
//!     }
//!     Ok(())
//! }
//! ```

mod auth;
pub mod backend;
mod channels;
mod dms;
pub mod error;
mod messages;
pub mod query;
mod servers;
mod storage;
mod users;

// Re-export commonly used types
pub use backend::ChatBackend;
pub use error::{ClientError, Result};
pub use query::TableQuery;
pub use storage::DEFAULT_BUCKET;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::{Arc, RwLock};

/// Default number of messages fetched per channel or DM thread
pub const DEFAULT_MESSAGE_LIMIT: usize = 50;

/// HTTP client for the EnloeChat backend
///
/// Cloning is cheap and clones share the access token, so signing in through
/// one clone authenticates all of them.
#[derive(Debug, Clone)]
pub struct EnloeClient {
    /// Base URL of the backend (e.g., "http://localhost:7130")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Bearer token of the signed-in user
    access_token: Arc<RwLock<Option<String>>>,
}

impl EnloeClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend (e.g., "http://localhost:7130")
    ///
    /// # Example
    /// ```
    /// use enloe_client::EnloeClient;
    ///
    /// let client = EnloeClient::new("http://localhost:7130");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use enloe_client::EnloeClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = EnloeClient::with_client("http://localhost:7130", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            access_token: Arc::new(RwLock::new(None)),
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Access Token
    // =============================================================================

    /// Current access token, if signed in
    pub fn access_token(&self) -> Option<String> {
        match self.access_token.read() {
            Ok(token) => token.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Install an access token, e.g. one restored from a saved session
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.replace_token(Some(token.into()));
    }

    /// Forget the access token
    pub fn clear_access_token(&self) {
        self.replace_token(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    fn replace_token(&self, token: Option<String>) {
        match self.access_token.write() {
            Ok(mut slot) => *slot = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    // =============================================================================
    // Request Helpers
    // =============================================================================

    /// Full URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request, attaching the bearer token when one is held
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);

        let builder = self.client.request(method, url);
        match self.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::from_body(status.as_u16(), &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is ignored (e.g., DELETE operations)
    pub(crate) async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::from_body(status.as_u16(), &error_text));
        }

        Ok(())
    }
}
