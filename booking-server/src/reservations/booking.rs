//! Booking workflow
//!
//! Orchestrates resolve → guard → availability check → merge → persist for
//! the guest-bearing role. Every date-affecting operation runs its check and
//! write inside one transaction so conflicting writers serialize at the
//! database.

use sqlx::SqlitePool;
use uuid::Uuid;

use shared::models::{ReservationRequest, ReservationResponse};

use crate::db::repository::{guest, property, reservation};

use super::error::{ReservationError, ReservationResult};
use super::lifecycle::{self, Operation};
use super::merge;
use super::model::{BookingState, Reservation, ReservationKind, ReservationStatus, Role};
use super::overlap;
use super::resolver;

const PROPERTY_NOT_FOUND: &str = "The Property was not found in the Database";

/// Create a new booking in status BOOKED.
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
        ReservationStatus::Booked.as_str(),
        request.begin_at,
        request.end_at,
    )
    .await?;
    for g in &request.guests {
        guest::insert(&mut *tx, id, &Uuid::new_v4().to_string(), g).await?;
    }

    tx.commit().await?;
    tracing::info!(booking = %uuid, property = %property.uuid, "Booking created");

    let created = Reservation {
        id,
        uuid,
        property_id: property.id,
        begin_date: request.begin_at,
        end_date: request.end_at,
        kind: ReservationKind::Booking {
            state: BookingState::Booked,
            guests: request.guests.clone(),
        },
    };
    created.into_response(&property)
}

/// Update the dates of a BOOKED booking and replace its guest list.
pub async fn update(
    pool: &SqlitePool,
    identifier: &str,
    request: &ReservationRequest,
) -> ReservationResult<ReservationResponse> {
    let mut tx = pool.begin().await?;

    let resolved = resolver::resolve(&mut tx, identifier).await?;
    let mut target = resolved.reservation;
    lifecycle::ensure(Role::Booking, Operation::Update, target.status())?;

    overlap::check_no_overlap(
        &mut *tx,
        Some(target.id),
        target.property_id,
        request.begin_at,
        request.end_at,
    )
    .await?;

    // Replace the guest list wholesale: drop the detached rows first
    guest::delete_by_ids(&mut *tx, &resolved.guest_row_ids).await?;
    merge::merge_into(
        &mut target,
        request.begin_at,
        request.end_at,
        request.guests.clone(),
    );
    reservation::update_dates(&mut *tx, target.id, target.begin_date, target.end_date).await?;
    for g in target.guests() {
        guest::insert(&mut *tx, target.id, &Uuid::new_v4().to_string(), g).await?;
    }

    let property = property::find_by_id(&mut *tx, target.property_id)
        .await?
        .ok_or_else(|| ReservationError::NotFound(PROPERTY_NOT_FOUND.to_string()))?;

    tx.commit().await?;
    tracing::info!(booking = %target.uuid, "Booking updated");

    target.into_response(&property)
}

/// Move a booking from BOOKED to CANCELED. The slot becomes free.
pub async fn cancel(pool: &SqlitePool, identifier: &str) -> ReservationResult<()> {
    let mut tx = pool.begin().await?;

    let resolved = resolver::resolve(&mut tx, identifier).await?;
    let target = resolved.reservation;
    lifecycle::ensure(Role::Booking, Operation::Cancel, target.status())?;

    reservation::update_status(&mut *tx, target.id, ReservationStatus::Canceled.as_str()).await?;

    tx.commit().await?;
    tracing::info!(booking = %target.uuid, "Booking canceled");
    Ok(())
}

/// Move a booking from CANCELED back to BOOKED, provided its own date range
/// is still free. The payload carries no dates here, so the record's current
/// range is what gets re-checked.
pub async fn rebook(pool: &SqlitePool, identifier: &str) -> ReservationResult<()> {
    let mut tx = pool.begin().await?;

    let resolved = resolver::resolve(&mut tx, identifier).await?;
    let target = resolved.reservation;
    lifecycle::ensure(Role::Booking, Operation::Rebook, target.status())?;

    overlap::check_no_overlap(
        &mut *tx,
        Some(target.id),
        target.property_id,
        target.begin_date,
        target.end_date,
    )
    .await?;

    reservation::update_status(&mut *tx, target.id, ReservationStatus::Booked.as_str()).await?;

    tx.commit().await?;
    tracing::info!(booking = %target.uuid, "Booking rebooked");
    Ok(())
}

/// Delete a booking and its guests permanently. Works from BOOKED and
/// CANCELED; never checks availability.
pub async fn delete(pool: &SqlitePool, identifier: &str) -> ReservationResult<()> {
    let mut tx = pool.begin().await?;

    let resolved = resolver::resolve(&mut tx, identifier).await?;
    let target = resolved.reservation;
    lifecycle::ensure(Role::Booking, Operation::Delete, target.status())?;

    guest::delete_by_ids(&mut *tx, &resolved.guest_row_ids).await?;
    reservation::delete_by_id(&mut *tx, target.id).await?;

    tx.commit().await?;
    tracing::info!(booking = %target.uuid, "Booking deleted");
    Ok(())
}

/// Fetch a booking by uuid. Blocks are invisible through this path.
pub async fn get(pool: &SqlitePool, identifier: &str) -> ReservationResult<ReservationResponse> {
    let mut conn = pool.acquire().await?;

    let resolved = resolver::resolve(&mut conn, identifier).await?;
    let target = resolved.reservation;
    lifecycle::ensure(Role::Booking, Operation::Read, target.status())?;

    let property = property::find_by_id(&mut *conn, target.property_id)
        .await?
        .ok_or_else(|| ReservationError::NotFound(PROPERTY_NOT_FOUND.to_string()))?;

    target.into_response(&property)
}
