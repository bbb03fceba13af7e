//! Core domain types
//!
//! Plain records mirroring the rows of the backend tables. The client keeps
//! no derived indices over them: whatever the last successful fetch returned
//! is what gets rendered.

pub mod channel;
pub mod dm;
pub mod message;
pub mod server;
pub mod user;
