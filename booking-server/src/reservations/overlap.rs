//! Availability check
//!
//! Two inclusive ranges `[a1, a2]` and `[b1, b2]` overlap iff
//! `a1 <= b2 && a2 >= b1`; the same two-clause form is what the repository
//! query evaluates against the active (BOOKED or BLOCKED) reservations of a
//! property. A canceled slot is free.

use chrono::NaiveDate;

use crate::db::repository::reservation;

use super::error::{ReservationError, ReservationResult};

/// Business-rule message for a failed availability check
pub const OVERLAP_MESSAGE: &str =
    "Error on saving Booking. The dates selected overlaps another existing booking";

/// Fail with a conflict when `[begin, end]` overlaps any active reservation
/// of the property.
///
/// `exclude` names the record being rewritten so it does not collide with
/// itself; `None` means the record is not yet persisted and nothing is
/// skipped.
pub async fn check_no_overlap(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    exclude: Option<i64>,
    property_id: i64,
    begin: NaiveDate,
    end: NaiveDate,
) -> ReservationResult<()> {
    if reservation::has_overlap(db, exclude, property_id, begin, end).await? {
        return Err(ReservationError::Conflict(OVERLAP_MESSAGE.to_string()));
    }
    Ok(())
}
