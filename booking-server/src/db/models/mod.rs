//! Database row types
//!
//! Storage-shaped structs (`sqlx::FromRow`). These never cross the API
//! boundary; handlers work with `shared::models` and the reservations
//! domain types instead.

pub mod guest;
pub mod property;
pub mod reservation;

// Re-exports
pub use guest::GuestRow;
pub use property::PropertyRow;
pub use reservation::ReservationRow;
