//! Lifecycle guard
//!
//! The permitted status transitions, written as one exhaustive table over
//! `(role, operation, current status)` so the whole transition set can be
//! reviewed in a single match. Two distinct failure outcomes:
//!
//! - `WrongStatus` - the record belongs to the caller's role but its current
//!   status forbids the operation (surfaced as a 409 conflict);
//! - `RoleMismatch` - the record belongs to the other role and is treated as
//!   absent (surfaced as a 404), for mutations as well as reads. A BLOCKED
//!   record can therefore never be touched through the booking endpoints,
//!   and vice versa.

use super::error::{ReservationError, ReservationResult};
use super::model::{ReservationStatus, Role};

/// Operations a workflow can attempt on an existing reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Update,
    Cancel,
    Rebook,
    Delete,
}

/// Outcome of a guard lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Allowed,
    WrongStatus(&'static str),
    RoleMismatch,
}

/// The transition table.
pub fn check(role: Role, op: Operation, status: ReservationStatus) -> Guard {
    use Operation::*;
    use ReservationStatus::*;
    use Role::*;

    match (role, op, status) {
        // ── Booking role ────────────────────────────────────────────
        (Booking, Read, Booked | Canceled) => Guard::Allowed,
        (Booking, Update, Booked) => Guard::Allowed,
        (Booking, Update, Canceled) => {
            Guard::WrongStatus("You can update bookings only with BOOKED status")
        }
        (Booking, Cancel, Booked) => Guard::Allowed,
        (Booking, Cancel, Canceled) => {
            Guard::WrongStatus("You can cancel bookings only with BOOKED status")
        }
        (Booking, Rebook, Canceled) => Guard::Allowed,
        (Booking, Rebook, Booked) => {
            Guard::WrongStatus("You can rebook bookings with CANCELED status")
        }
        (Booking, Delete, Booked | Canceled) => Guard::Allowed,
        // A block reached through the booking endpoints is invisible
        (Booking, _, Blocked) => Guard::RoleMismatch,

        // ── Block role ──────────────────────────────────────────────
        (Block, Read | Update | Delete, Blocked) => Guard::Allowed,
        // Blocks have no cancel/rebook lifecycle
        (Block, Cancel | Rebook, Blocked) => Guard::RoleMismatch,
        // A booking reached through the block endpoints is invisible
        (Block, _, Booked | Canceled) => Guard::RoleMismatch,
    }
}

/// Apply the table, mapping failures onto the domain error kinds.
pub fn ensure(role: Role, op: Operation, status: ReservationStatus) -> ReservationResult<()> {
    match check(role, op, status) {
        Guard::Allowed => Ok(()),
        Guard::WrongStatus(msg) => Err(ReservationError::Conflict(msg.to_string())),
        Guard::RoleMismatch => Err(ReservationError::NotFound(format!(
            "The {} was not found in the Database",
            role.entity_name()
        ))),
    }
}
