//! Reservation domain
//!
//! The availability engine shared by the two reservation roles:
//!
//! - [`model`] - the role sum type (`Booking` with guests / `Block` without)
//! - [`lifecycle`] - the status transition table per role and operation
//! - [`overlap`] - the inclusive date-range availability check
//! - [`merge`] - role-conditional merge of update payloads
//! - [`resolver`] - textual identifier parsing and lookup
//! - [`booking`] / [`block`] - the per-role workflows the API calls into
//!
//! Everything here speaks [`ReservationError`]; handlers convert it to the
//! HTTP error type at the boundary.

pub mod block;
pub mod booking;
pub mod error;
pub mod lifecycle;
pub mod merge;
pub mod model;
pub mod overlap;
pub mod resolver;

// Re-export common types
pub use error::{ReservationError, ReservationResult};
pub use model::{BookingState, Reservation, ReservationKind, ReservationStatus, Role};
