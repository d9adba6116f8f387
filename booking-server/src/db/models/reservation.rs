//! Reservation row

use chrono::NaiveDate;

/// Reservation row (`reservation` table), shared by bookings and blocks.
/// The role split happens when the row is lifted into the domain type.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReservationRow {
    pub id: i64,
    pub uuid: String,
    pub property_id: i64,
    pub status: String,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
}
