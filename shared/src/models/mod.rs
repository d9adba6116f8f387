//! Data models
//!
//! Shared between booking-server and API clients. These are the request and
//! response payloads only; database row types live next to the repositories.
//! Internal `i64` ids never appear here; clients see UUIDs.

pub mod guest;
pub mod property;
pub mod reservation;

// Re-exports
pub use guest::*;
pub use property::*;
pub use reservation::*;
