//! Reservation request/response payloads
//!
//! One request shape serves both roles: the booking endpoints require a
//! non-empty guest list, the block endpoints ignore it entirely.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{GuestPayload, PropertyInfo};

/// Create/update payload for bookings and blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// UUID of the target property
    pub property_id: String,
    /// First occupied day (inclusive)
    pub begin_at: NaiveDate,
    /// Last occupied day (inclusive)
    pub end_at: NaiveDate,
    /// Guest list; required for bookings, ignored for blocks
    #[serde(default)]
    pub guests: Vec<GuestPayload>,
}

/// Reservation as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub uuid: Uuid,
    pub property: PropertyInfo,
    /// BOOKED | BLOCKED | CANCELED
    pub status: String,
    pub begin_at: NaiveDate,
    pub end_at: NaiveDate,
    /// Always empty for blocks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guests: Vec<GuestPayload>,
}
