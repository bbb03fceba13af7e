//! Auth/session state
//!
//! Holds who is signed in and wraps the three backend calls that change it.
//! Failures never escape as errors: they come back as an [`AuthOutcome`]
//! whose message is shown to the user.

use std::sync::Arc;

use enloe_client::ChatBackend;
use enloe_core::domain::user::{AuthUser, User};
use enloe_core::dto::auth::{Credentials, ProfileUpdate, SignUpRequest};
use tracing::{debug, warn};

/// Result of a user-initiated auth action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl AuthOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Signed-in user and profile, plus the loading flag the views gate on
pub struct AuthState {
    backend: Arc<dyn ChatBackend>,
    user: Option<AuthUser>,
    profile: Option<User>,
    is_loading: bool,
}

impl AuthState {
    /// New state; loading until [`AuthState::initialize`] has run
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            user: None,
            profile: None,
            is_loading: true,
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn profile(&self) -> Option<&User> {
        self.profile.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Pick up an existing session, if the backend still recognises one
    pub async fn initialize(&mut self) {
        match self.backend.current_user().await {
            Ok(current) => {
                self.user = Some(current.user);
                self.profile = Some(current.profile);
            }
            Err(e) => debug!("No existing session: {}", e),
        }
        self.is_loading = false;
    }

    /// Sign in, then fetch the profile; both must succeed
    pub async fn sign_in(&mut self, email: &str, password: &str) -> AuthOutcome {
        let credentials = Credentials::new(email, password);
        if let Err(e) = credentials.validate_sign_in() {
            return AuthOutcome::failure(e.to_string());
        }

        self.is_loading = true;
        let outcome = self.complete_sign_in(&credentials).await;
        self.is_loading = false;
        outcome
    }

    async fn complete_sign_in(&mut self, credentials: &Credentials) -> AuthOutcome {
        let session = match self.backend.sign_in(credentials).await {
            Ok(session) => session,
            Err(e) => return AuthOutcome::failure(e.user_message()),
        };

        match self.backend.current_user().await {
            Ok(current) => {
                self.user = Some(session.user);
                self.profile = Some(current.profile);
                AuthOutcome::success()
            }
            Err(e) => AuthOutcome::failure(e.user_message()),
        }
    }

    /// Create an account and set its initial nickname
    ///
    /// The request is validated first; an invalid one never reaches the backend.
    pub async fn sign_up(&mut self, email: &str, password: &str, nickname: &str) -> AuthOutcome {
        let request = SignUpRequest {
            credentials: Credentials::new(email, password),
            nickname: nickname.trim().to_string(),
        };
        if let Err(e) = request.validate() {
            return AuthOutcome::failure(e.to_string());
        }

        self.is_loading = true;
        let outcome = self.complete_sign_up(&request).await;
        self.is_loading = false;
        outcome
    }

    async fn complete_sign_up(&mut self, request: &SignUpRequest) -> AuthOutcome {
        let session = match self.backend.sign_up(&request.credentials).await {
            Ok(session) => session,
            Err(e) => return AuthOutcome::failure(e.user_message()),
        };

        let update = ProfileUpdate::nickname(request.nickname.clone());
        match self.backend.set_profile(&update).await {
            Ok(profile) => {
                self.user = Some(session.user);
                self.profile = Some(profile);
                AuthOutcome::success()
            }
            Err(e) => AuthOutcome::failure(e.user_message()),
        }
    }

    /// Sign out; local state is cleared even if the backend call fails
    pub async fn sign_out(&mut self) {
        if let Err(e) = self.backend.sign_out().await {
            warn!("Sign out failed: {}", e);
        }
        self.user = None;
        self.profile = None;
    }

    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> AuthOutcome {
        if self.user.is_none() {
            return AuthOutcome::failure("Not authenticated");
        }

        match self.backend.set_profile(update).await {
            Ok(profile) => {
                self.profile = Some(profile);
                AuthOutcome::success()
            }
            Err(e) => AuthOutcome::failure(e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;

    fn state(backend: &Arc<FakeBackend>) -> AuthState {
        AuthState::new(backend.clone())
    }

    #[tokio::test]
    async fn test_starts_loading_and_initialize_clears_it() {
        let backend = Arc::new(FakeBackend::new());
        let mut auth = state(&backend);
        assert!(auth.is_loading());

        auth.initialize().await;
        assert!(!auth.is_loading());
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_initialize_restores_existing_session() {
        let backend = Arc::new(FakeBackend::signed_in());
        let mut auth = state(&backend);

        auth.initialize().await;
        assert!(auth.is_authenticated());
        assert_eq!(auth.profile().unwrap().nickname, "ally");
    }

    #[tokio::test]
    async fn test_short_password_rejected_before_any_request() {
        let backend = Arc::new(FakeBackend::new());
        let mut auth = state(&backend);

        let outcome = auth.sign_up("ally@example.com", "12345", "ally").await;

        assert!(!outcome.success);
        assert_eq!(
            outcome.error.as_deref(),
            Some("Password must be at least 6 characters")
        );
        assert!(backend.calls().is_empty());
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_up_sets_initial_nickname() {
        let backend = Arc::new(FakeBackend::new());
        let mut auth = state(&backend);

        let outcome = auth.sign_up("ally@example.com", "hunter22", " Ally ").await;

        assert_eq!(outcome, AuthOutcome::success());
        assert_eq!(backend.calls(), vec!["sign_up", "set_profile"]);
        assert_eq!(auth.profile().unwrap().nickname, "Ally");
        assert!(!auth.is_loading());
    }

    #[tokio::test]
    async fn test_sign_up_rejected_by_backend() {
        let backend = Arc::new(FakeBackend {
            sign_up_error: Some("User already registered".to_string()),
            ..FakeBackend::new()
        });
        let mut auth = state(&backend);

        let outcome = auth.sign_up("ally@example.com", "hunter22", "ally").await;

        assert_eq!(outcome, AuthOutcome::failure("User already registered"));
        assert_eq!(backend.calls(), vec!["sign_up"]);
        assert!(!auth.is_authenticated());
        assert!(auth.profile().is_none());
        assert!(!auth.is_loading());
    }

    #[tokio::test]
    async fn test_sign_up_fails_when_nickname_cannot_be_set() {
        let backend = Arc::new(FakeBackend {
            profile_error: Some("nickname taken".to_string()),
            ..FakeBackend::new()
        });
        let mut auth = state(&backend);

        let outcome = auth.sign_up("ally@example.com", "hunter22", "ally").await;

        assert_eq!(outcome, AuthOutcome::failure("nickname taken"));
        assert_eq!(backend.calls(), vec!["sign_up", "set_profile"]);
        assert!(!auth.is_authenticated());
        assert!(auth.profile().is_none());
        assert!(!auth.is_loading());
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let backend = Arc::new(FakeBackend::new());
        let mut auth = state(&backend);

        let outcome = auth.sign_in("ally@example.com", "pw").await;

        assert!(outcome.success);
        assert_eq!(backend.calls(), vec!["sign_in", "current_user"]);
        assert_eq!(auth.user().unwrap().email, "ally@example.com");
    }

    #[tokio::test]
    async fn test_sign_in_surfaces_backend_message() {
        let backend = Arc::new(FakeBackend {
            sign_in_error: Some("Invalid login credentials".to_string()),
            ..FakeBackend::new()
        });
        let mut auth = state(&backend);

        let outcome = auth.sign_in("ally@example.com", "wrong").await;

        assert_eq!(outcome, AuthOutcome::failure("Invalid login credentials"));
        assert!(!auth.is_authenticated());
        assert!(!auth.is_loading());
    }

    #[tokio::test]
    async fn test_sign_in_needs_profile_too() {
        let backend = Arc::new(FakeBackend {
            profile_error: Some("profile missing".to_string()),
            ..FakeBackend::new()
        });
        let mut auth = state(&backend);

        let outcome = auth.sign_in("ally@example.com", "pw").await;

        assert!(!outcome.success);
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_out_clears_state_even_on_failure() {
        let backend = Arc::new(FakeBackend {
            sign_out_error: Some("network down".to_string()),
            ..FakeBackend::signed_in()
        });
        let mut auth = state(&backend);
        auth.initialize().await;
        assert!(auth.is_authenticated());

        auth.sign_out().await;
        assert!(!auth.is_authenticated());
        assert!(auth.profile().is_none());
    }

    #[tokio::test]
    async fn test_update_profile_requires_user() {
        let backend = Arc::new(FakeBackend::new());
        let mut auth = state(&backend);

        let outcome = auth.update_profile(&ProfileUpdate::nickname("new")).await;

        assert_eq!(outcome, AuthOutcome::failure("Not authenticated"));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_profile_replaces_profile() {
        let backend = Arc::new(FakeBackend::signed_in());
        let mut auth = state(&backend);
        auth.initialize().await;

        let update = ProfileUpdate {
            bio: Some("hello".to_string()),
            ..ProfileUpdate::nickname("ally2")
        };
        let outcome = auth.update_profile(&update).await;

        assert!(outcome.success);
        assert_eq!(auth.profile().unwrap().nickname, "ally2");
        assert_eq!(auth.profile().unwrap().bio.as_deref(), Some("hello"));
    }
}
