//! Auth DTOs

use serde::{Deserialize, Serialize};

use crate::domain::user::{AuthUser, User};
use crate::validation::{
    ValidationError, validate_email, validate_new_password, validate_nickname,
    validate_password_present,
};

/// Email/password pair for sign-in and sign-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Checks applied before a sign-in request
    pub fn validate_sign_in(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;
        validate_password_present(&self.password)
    }

    /// Checks applied before a sign-up request
    pub fn validate_sign_up(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;
        validate_new_password(&self.password)
    }
}

/// Everything the sign-up form collects
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub credentials: Credentials,
    pub nickname: String,
}

impl SignUpRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.credentials.validate_sign_up()?;
        validate_nickname(&self.nickname)
    }
}

/// Successful sign-in or sign-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Identity plus profile of the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user: AuthUser,
    pub profile: User,
}

/// Partial profile update; absent fields are left untouched by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn nickname(nickname: impl Into<String>) -> Self {
        Self {
            nickname: Some(nickname.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nickname.is_none() && self.avatar_url.is_none() && self.bio.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate::nickname("ally");
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "nickname": "ally" }));
    }

    #[test]
    fn test_auth_session_token_key() {
        let json = r#"{"user":{"id":"u1","email":"a@b.c","role":"authenticated"},"accessToken":"tok"}"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.access_token, "tok");
    }

    #[test]
    fn test_sign_up_validation_order() {
        let req = SignUpRequest {
            credentials: Credentials::new("a@b.c", "123"),
            nickname: "x".to_string(),
        };
        assert_eq!(req.validate(), Err(ValidationError::PasswordTooShort));
    }
}
