//! Property Repository
//!
//! Properties are referenced, never owned: the service only looks them up.

use super::RepoResult;
use crate::db::models::PropertyRow;

pub async fn find_by_uuid(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    uuid: &str,
) -> RepoResult<Option<PropertyRow>> {
    let property = sqlx::query_as::<_, PropertyRow>(
        "SELECT id, uuid, name, description FROM property WHERE uuid = ?",
    )
    .bind(uuid)
    .fetch_optional(db)
    .await?;
    Ok(property)
}

pub async fn find_by_id(
    db: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    id: i64,
) -> RepoResult<Option<PropertyRow>> {
    let property = sqlx::query_as::<_, PropertyRow>(
        "SELECT id, uuid, name, description FROM property WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(property)
}
