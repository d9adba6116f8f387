//! Block workflow
//!
//! Administrative holds share the reservation table with bookings but carry
//! no guests and no cancel/rebook lifecycle: a block is created BLOCKED and
//! stays BLOCKED until it is deleted.

use sqlx::SqlitePool;
use uuid::Uuid;

use shared::models::{ReservationRequest, ReservationResponse};

use crate::db::repository::{property, reservation};

use super::error::{ReservationError, ReservationResult};
use super::lifecycle::{self, Operation};
use super::merge;
use super::model::{Reservation, ReservationKind, ReservationStatus, Role};
use super::overlap;
use super::resolver;

const PROPERTY_NOT_FOUND: &str = "The Property was not found in the Database";

/// Create a new block in status BLOCKED. Any guests in the payload are
/// dropped.
pub async fn create(
    pool: &SqlitePool,
    request: &ReservationRequest,
) -> ReservationResult<ReservationResponse> {
    let property_uuid = Uuid::parse_str(&request.property_id).map_err(|_| {
        ReservationError::Validation(format!(
            "The Property ID '{}' is not a valid UUID",
            request.property_id
        ))
    })?;

    let mut tx = pool.begin().await?;

    let property = property::find_by_uuid(&mut *tx, &property_uuid.to_string())
        .await?
        .ok_or_else(|| ReservationError::NotFound(PROPERTY_NOT_FOUND.to_string()))?;

    overlap::check_no_overlap(&mut *tx, None, property.id, request.begin_at, request.end_at)
        .await?;

    let uuid = Uuid::new_v4();
    let id = reservation::insert(
        &mut *tx,
        &uuid.to_string(),
        property.id,
        ReservationStatus::Blocked.as_str(),
        request.begin_at,
        request.end_at,
    )
    .await?;

    tx.commit().await?;
    tracing::info!(block = %uuid, property = %property.uuid, "Block created");

    let created = Reservation {
        id,
        uuid,
        property_id: property.id,
        begin_date: request.begin_at,
        end_date: request.end_at,
        kind: ReservationKind::Block,
    };
    created.into_response(&property)
}

/// Update the dates of a block. The record's current range is what gets
/// re-checked against the other active reservations; the guest payload is
/// ignored by the merge.
pub async fn update(
    pool: &SqlitePool,
    identifier: &str,
    request: &ReservationRequest,
) -> ReservationResult<ReservationResponse> {
    let mut tx = pool.begin().await?;

    let resolved = resolver::resolve(&mut tx, identifier).await?;
    let mut target = resolved.reservation;
    lifecycle::ensure(Role::Block, Operation::Update, target.status())?;

    overlap::check_no_overlap(
        &mut *tx,
        Some(target.id),
        target.property_id,
        target.begin_date,
        target.end_date,
    )
    .await?;

    merge::merge_into(
        &mut target,
        request.begin_at,
        request.end_at,
        request.guests.clone(),
    );
    reservation::update_dates(&mut *tx, target.id, target.begin_date, target.end_date).await?;

    let property = property::find_by_id(&mut *tx, target.property_id)
        .await?
        .ok_or_else(|| ReservationError::NotFound(PROPERTY_NOT_FOUND.to_string()))?;

    tx.commit().await?;
    tracing::info!(block = %target.uuid, "Block updated");

    target.into_response(&property)
}

/// Delete a block permanently.
pub async fn delete(pool: &SqlitePool, identifier: &str) -> ReservationResult<()> {
    let mut tx = pool.begin().await?;

    let resolved = resolver::resolve(&mut tx, identifier).await?;
    let target = resolved.reservation;
    lifecycle::ensure(Role::Block, Operation::Delete, target.status())?;

    reservation::delete_by_id(&mut *tx, target.id).await?;

    tx.commit().await?;
    tracing::info!(block = %target.uuid, "Block deleted");
    Ok(())
}

/// Fetch a block by uuid. Bookings are invisible through this path.
pub async fn get(pool: &SqlitePool, identifier: &str) -> ReservationResult<ReservationResponse> {
    let mut conn = pool.acquire().await?;

    let resolved = resolver::resolve(&mut conn, identifier).await?;
    let target = resolved.reservation;
    lifecycle::ensure(Role::Block, Operation::Read, target.status())?;

    let property = property::find_by_id(&mut *conn, target.property_id)
        .await?
        .ok_or_else(|| ReservationError::NotFound(PROPERTY_NOT_FOUND.to_string()))?;

    target.into_response(&property)
}
