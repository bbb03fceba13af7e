//! Data Transfer Objects
//!
//! Request bodies sent to the backend and the composite responses it returns.
//! Domain rows are in [`crate::domain`]; these are the shapes around them.

pub mod auth;
pub mod channel;
pub mod dm;
pub mod message;
pub mod server;
pub mod storage;
