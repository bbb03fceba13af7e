//! Login form model
//!
//! One form for both sign-in and sign-up, switched with a toggle.

use crate::session::AuthState;

/// Message shown when a failed action carries no message of its own
pub const GENERIC_ERROR: &str = "An error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub mode: LoginMode,
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl LoginForm {
    pub fn sign_in(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn sign_up(
        email: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        let mut form = Self::sign_in(email, password);
        form.nickname = nickname.into();
        form.toggle_mode();
        form
    }

    pub fn is_sign_up(&self) -> bool {
        self.mode == LoginMode::SignUp
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LoginMode::SignIn => LoginMode::SignUp,
            LoginMode::SignUp => LoginMode::SignIn,
        };
    }

    /// Submit the form; returns whether the user is now signed in
    pub async fn submit(&mut self, auth: &mut AuthState) -> bool {
        self.error = None;
        self.is_loading = true;

        let outcome = match self.mode {
            LoginMode::SignUp => {
                auth.sign_up(&self.email, &self.password, &self.nickname)
                    .await
            }
            LoginMode::SignIn => auth.sign_in(&self.email, &self.password).await,
        };

        self.is_loading = false;
        if !outcome.success {
            self.error = Some(outcome.error.unwrap_or_else(|| GENERIC_ERROR.to_string()));
        }
        outcome.success
    }
}
