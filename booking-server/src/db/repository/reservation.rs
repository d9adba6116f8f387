//! Reservation Repository
//!
//! One table backs both bookings and blocks; the status column carries the
//! role. The overlap check is the single query the availability rules hang
//! on, so its WHERE clause is kept in the minimal two-clause form.

use super::{RepoError, RepoResult};
use crate::db::models::ReservationRow;
use chrono::NaiveDate;

pub async fn find_by_uuid(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    uuid: &str,
) -> RepoResult<Option<ReservationRow>> {
    let reservation = sqlx::query_as::<_, ReservationRow>(
        "SELECT id, uuid, property_id, status, begin_date, end_date \
         FROM reservation WHERE uuid = ?",
    )
    .bind(uuid)
    .fetch_optional(db)
    .await?;
    Ok(reservation)
}

/// True when any active (BOOKED or BLOCKED) reservation of the property
/// shares at least one day with `[begin, end]`, both ends inclusive.
///
/// `exclude` skips the record being updated; `None` means "not yet
/// persisted", so nothing is skipped. Canceled rows never count.
pub async fn has_overlap(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    exclude: Option<i64>,
    property_id: i64,
    begin: NaiveDate,
    end: NaiveDate,
) -> RepoResult<bool> {
    let overlaps = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS( \
             SELECT 1 FROM reservation \
             WHERE property_id = ?1 \
               AND status IN ('BOOKED', 'BLOCKED') \
               AND (?2 IS NULL OR id <> ?2) \
               AND begin_date <= ?3 \
               AND end_date >= ?4 \
         )",
    )
    .bind(property_id)
    .bind(exclude)
    .bind(end)
    .bind(begin)
    .fetch_one(db)
    .await?;
    Ok(overlaps)
}

pub async fn insert(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    uuid: &str,
    property_id: i64,
    status: &str,
    begin: NaiveDate,
    end: NaiveDate,
) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO reservation (uuid, property_id, status, begin_date, end_date) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(uuid)
    .bind(property_id)
    .bind(status)
    .bind(begin)
    .bind(end)
    .fetch_one(db)
    .await?;
    Ok(id)
}

pub async fn update_dates(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    id: i64,
    begin: NaiveDate,
    end: NaiveDate,
) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE reservation SET begin_date = ?, end_date = ? WHERE id = ?")
        .bind(begin)
        .bind(end)
        .bind(id)
        .execute(db)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    Ok(())
}

pub async fn update_status(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    id: i64,
    status: &str,
) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE reservation SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(db)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    Ok(())
}

pub async fn delete_by_id(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    id: i64,
) -> RepoResult<()> {
    sqlx::query("DELETE FROM reservation WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(())
}
