//! Guest Repository
//!
//! Guests are write-through value copies: a booking update deletes the old
//! rows and inserts the replacement list, nothing is patched in place.

use super::RepoResult;
use crate::db::models::GuestRow;
use shared::models::GuestPayload;

pub async fn find_by_reservation(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    reservation_id: i64,
) -> RepoResult<Vec<GuestRow>> {
    let guests = sqlx::query_as::<_, GuestRow>(
        "SELECT id, uuid, reservation_id, name, age, email, document_type, document_number \
         FROM guest WHERE reservation_id = ? ORDER BY id",
    )
    .bind(reservation_id)
    .fetch_all(db)
    .await?;
    Ok(guests)
}

pub async fn insert(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    reservation_id: i64,
    uuid: &str,
    guest: &GuestPayload,
) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO guest (uuid, reservation_id, name, age, email, document_type, document_number) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(uuid)
    .bind(reservation_id)
    .bind(&guest.name)
    .bind(guest.age)
    .bind(&guest.email)
    .bind(&guest.document_type)
    .bind(&guest.document_number)
    .fetch_one(db)
    .await?;
    Ok(id)
}

pub async fn delete_by_ids(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    ids: &[i64],
) -> RepoResult<()> {
    if ids.is_empty() {
        return Ok(());
    }
    // SQLite has no array binds; expand one placeholder per id
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("DELETE FROM guest WHERE id IN ({placeholders})");
    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(*id);
    }
    query.execute(db).await?;
    Ok(())
}
