//! Reservation domain model
//!
//! One storage row backs two roles. Instead of a status enum plus
//! `is_booking`/`is_block` predicates, the domain type is a sum: a `Booking`
//! carries its guest list and a two-state lifecycle, a `Block` carries
//! nothing. The flat `ReservationStatus` remains the storage and wire
//! representation; conversion between the two is total.

use chrono::NaiveDate;
use shared::models::{GuestPayload, ReservationResponse};
use uuid::Uuid;

use crate::db::models::{GuestRow, PropertyRow, ReservationRow};

use super::error::{ReservationError, ReservationResult};

/// Stored status of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Booked,
    Blocked,
    Canceled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Booked => "BOOKED",
            ReservationStatus::Blocked => "BLOCKED",
            ReservationStatus::Canceled => "CANCELED",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "BOOKED" => Some(ReservationStatus::Booked),
            "BLOCKED" => Some(ReservationStatus::Blocked),
            "CANCELED" => Some(ReservationStatus::Canceled),
            _ => None,
        }
    }

    /// Role is derived from status, never stored
    pub fn role(&self) -> Role {
        match self {
            ReservationStatus::Booked | ReservationStatus::Canceled => Role::Booking,
            ReservationStatus::Blocked => Role::Block,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two reservation roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Booking,
    Block,
}

impl Role {
    /// Entity name used in not-found messages
    pub fn entity_name(&self) -> &'static str {
        match self {
            Role::Booking => "Booking",
            Role::Block => "Block",
        }
    }
}

/// Lifecycle state of the booking role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    Booked,
    Canceled,
}

/// Role-specific payload of a reservation
#[derive(Debug, Clone)]
pub enum ReservationKind {
    /// Guest-bearing reservation; cycles between BOOKED and CANCELED
    Booking {
        state: BookingState,
        guests: Vec<GuestPayload>,
    },
    /// Administrative hold; always BLOCKED, never has guests
    Block,
}

/// A reservation lifted out of storage
#[derive(Debug, Clone)]
pub struct Reservation {
    pub id: i64,
    pub uuid: Uuid,
    pub property_id: i64,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: ReservationKind,
}

impl Reservation {
    /// Flat status for storage and the API
    pub fn status(&self) -> ReservationStatus {
        match &self.kind {
            ReservationKind::Booking {
                state: BookingState::Booked,
                ..
            } => ReservationStatus::Booked,
            ReservationKind::Booking {
                state: BookingState::Canceled,
                ..
            } => ReservationStatus::Canceled,
            ReservationKind::Block => ReservationStatus::Blocked,
        }
    }

    pub fn role(&self) -> Role {
        match self.kind {
            ReservationKind::Booking { .. } => Role::Booking,
            ReservationKind::Block => Role::Block,
        }
    }

    pub fn guests(&self) -> &[GuestPayload] {
        match &self.kind {
            ReservationKind::Booking { guests, .. } => guests,
            ReservationKind::Block => &[],
        }
    }

    /// Lift a stored row (plus its guest rows) into the domain sum type.
    ///
    /// Both fields are written exclusively by this service, so a parse
    /// failure here is a corrupted database, not caller input.
    pub fn from_row(row: &ReservationRow, guest_rows: &[GuestRow]) -> ReservationResult<Self> {
        let uuid = Uuid::parse_str(&row.uuid).map_err(|_| {
            ReservationError::Database(format!("Stored reservation {} has an invalid uuid", row.id))
        })?;
        let status = ReservationStatus::parse(&row.status).ok_or_else(|| {
            ReservationError::Database(format!(
                "Stored reservation {} has an unknown status '{}'",
                row.id, row.status
            ))
        })?;

        let kind = match status {
            ReservationStatus::Booked => ReservationKind::Booking {
                state: BookingState::Booked,
                guests: guest_rows.iter().map(GuestPayload::from).collect(),
            },
            ReservationStatus::Canceled => ReservationKind::Booking {
                state: BookingState::Canceled,
                guests: guest_rows.iter().map(GuestPayload::from).collect(),
            },
            ReservationStatus::Blocked => ReservationKind::Block,
        };

        Ok(Self {
            id: row.id,
            uuid,
            property_id: row.property_id,
            begin_date: row.begin_date,
            end_date: row.end_date,
            kind,
        })
    }

    /// API shape of this reservation
    pub fn into_response(self, property: &PropertyRow) -> ReservationResult<ReservationResponse> {
        let info = property.to_info().ok_or_else(|| {
            ReservationError::Database(format!(
                "Stored property {} has an invalid uuid",
                property.id
            ))
        })?;
        let status = self.status();
        let guests = match self.kind {
            ReservationKind::Booking { guests, .. } => guests,
            ReservationKind::Block => Vec::new(),
        };
        Ok(ReservationResponse {
            uuid: self.uuid,
            property: info,
            status: status.as_str().to_string(),
            begin_at: self.begin_date,
            end_at: self.end_date,
            guests,
        })
    }
}

impl From<&GuestRow> for GuestPayload {
    fn from(row: &GuestRow) -> Self {
        GuestPayload {
            name: row.name.clone(),
            age: row.age,
            email: row.email.clone(),
            document_type: row.document_type.clone(),
            document_number: row.document_number.clone(),
        }
    }
}
