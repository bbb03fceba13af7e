//! Enloe Core
//!
//! Core types and rules for the EnloeChat client.
//!
//! This crate contains:
//! - Domain types: records mirroring the backend tables (servers, channels, messages, etc.)
//! - DTOs: request and response shapes exchanged with the backend
//! - Validation: client-side checks enforced before any request is issued

pub mod domain;
pub mod dto;
pub mod validation;

pub use validation::ValidationError;

/// Shorten a backend identifier for display
///
/// UUIDs are cut to their first eight hex digits; anything else is returned unchanged.
pub fn short_id(id: &str) -> String {
    match uuid::Uuid::parse_str(id) {
        Ok(uuid) => uuid.simple().to_string()[..8].to_string(),
        Err(_) => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_truncates_uuid() {
        assert_eq!(short_id("3f2a9c1e-0000-4000-8000-000000000000"), "3f2a9c1e");
    }

    #[test]
    fn test_short_id_keeps_other_ids() {
        assert_eq!(short_id("general"), "general");
    }
}
