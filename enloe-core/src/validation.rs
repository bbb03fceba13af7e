//! Client-side validation
//!
//! Checks run before a request is issued. A failure here means the backend
//! is never contacted.

use thiserror::Error;

/// Minimum password length accepted on sign-up
pub const MIN_PASSWORD_LEN: usize = 6;

/// Nickname length bounds on sign-up
pub const MIN_NICKNAME_LEN: usize = 2;
pub const MAX_NICKNAME_LEN: usize = 32;

/// Longest server or channel name accepted
pub const MAX_NAME_LEN: usize = 100;

/// Largest file accepted for upload (5 MB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// A client-side validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password is required")]
    MissingPassword,

    #[error("Password must be at least {min} characters", min = MIN_PASSWORD_LEN)]
    PasswordTooShort,

    #[error(
        "Nickname must be between {min} and {max} characters",
        min = MIN_NICKNAME_LEN,
        max = MAX_NICKNAME_LEN
    )]
    InvalidNickname,

    #[error("{0} cannot be empty")]
    EmptyName(&'static str),

    #[error("{0} is too long (max {max} characters)", max = MAX_NAME_LEN)]
    NameTooLong(&'static str),

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("File size must be less than 5MB")]
    FileTooLarge,
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Sign-in only requires a password to be present
pub fn validate_password_present(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(())
}

/// Sign-up requires a password of at least [`MIN_PASSWORD_LEN`] characters
pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    validate_password_present(password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    let len = nickname.trim().chars().count();
    if !(MIN_NICKNAME_LEN..=MAX_NICKNAME_LEN).contains(&len) {
        return Err(ValidationError::InvalidNickname);
    }
    Ok(())
}

/// Validate a server or channel name; `what` names the field in the message
pub fn validate_name(what: &'static str, name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName(what));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong(what));
    }
    Ok(())
}

pub fn validate_upload_size(size: u64) -> Result<(), ValidationError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}
