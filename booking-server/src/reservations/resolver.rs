//! Identifier resolution
//!
//! Turns the textual identifier from the URL into a domain reservation:
//! empty or malformed input is a validation error, a well-formed identifier
//! with no stored record is absence. Role filtering happens afterwards via
//! the lifecycle guard.

use sqlx::SqliteConnection;
use uuid::Uuid;

use crate::db::repository::{guest, reservation};

use super::error::{ReservationError, ReservationResult};
use super::model::Reservation;

/// A resolved reservation plus the storage ids of its guest rows, which the
/// workflows need when the guest list is replaced or the record removed.
pub struct Resolved {
    pub reservation: Reservation,
    pub guest_row_ids: Vec<i64>,
}

/// Parse the textual identifier of a reservation.
pub fn parse_identifier(text: &str) -> ReservationResult<Uuid> {
    if text.trim().is_empty() {
        return Err(ReservationError::Validation(
            "The Booking ID must not be NULL or EMPTY".to_string(),
        ));
    }
    Uuid::parse_str(text.trim()).map_err(|_| {
        ReservationError::Validation(format!("The Booking ID '{text}' is not a valid UUID"))
    })
}

/// Look up a reservation by its textual uuid.
pub async fn resolve(conn: &mut SqliteConnection, identifier: &str) -> ReservationResult<Resolved> {
    let uuid = parse_identifier(identifier)?;

    let row = reservation::find_by_uuid(&mut *conn, &uuid.to_string())
        .await?
        .ok_or_else(|| {
            ReservationError::NotFound("The Booking was not found in the Database".to_string())
        })?;

    let guest_rows = guest::find_by_reservation(&mut *conn, row.id).await?;
    let guest_row_ids = guest_rows.iter().map(|g| g.id).collect();
    let reservation = Reservation::from_row(&row, &guest_rows)?;

    Ok(Resolved {
        reservation,
        guest_row_ids,
    })
}
