//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use shared::models::{GuestPayload, ReservationRequest, ReservationResponse};

use crate::core::ServerState;
use crate::reservations::booking;
use crate::utils::validation::{
    MAX_DOCUMENT_TYPE_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, validate_optional_text,
    validate_required_text, validate_uuid_text,
};
use crate::utils::{AppError, AppResult};

pub(crate) fn validate_guest(guest: &GuestPayload) -> AppResult<()> {
    validate_required_text(&guest.name, "name of the guest", MAX_NAME_LEN)?;
    if guest.age < 0 {
        return Err(AppError::validation(
            "The age of the guest must not be negative",
        ));
    }
    validate_optional_text(&guest.email, "email of the guest", MAX_EMAIL_LEN)?;
    validate_optional_text(
        &guest.document_type,
        "document type of the guest",
        MAX_DOCUMENT_TYPE_LEN,
    )?;
    validate_optional_text(
        &guest.document_number,
        "document number of the guest",
        MAX_NAME_LEN,
    )?;
    Ok(())
}

pub(crate) fn validate_dates(payload: &ReservationRequest) -> AppResult<()> {
    validate_uuid_text(&payload.property_id, "Property ID")?;
    if payload.end_at < payload.begin_at {
        return Err(AppError::validation(
            "The end_at date must not precede the begin_at date",
        ));
    }
    Ok(())
}

fn validate_payload(payload: &ReservationRequest) -> AppResult<()> {
    validate_dates(payload)?;
    if payload.guests.is_empty() {
        return Err(AppError::validation(
            "The Guest list must not be NULL or EMPTY",
        ));
    }
    for guest in &payload.guests {
        validate_guest(guest)?;
    }
    Ok(())
}

/// POST /api/v1/booking - create a new booking
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationRequest>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&payload)?;
    let created = booking::create(&state.pool, &payload).await?;
    let location = format!("/api/v1/booking/{}", created.uuid);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// GET /api/v1/booking/:uuid - fetch a booking
pub async fn get_by_uuid(
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> AppResult<Json<ReservationResponse>> {
    let found = booking::get(&state.pool, &uuid).await?;
    Ok(Json(found))
}

/// PUT /api/v1/booking/:uuid - update dates and guest list
pub async fn update(
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<ReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    validate_payload(&payload)?;
    let updated = booking::update(&state.pool, &uuid, &payload).await?;
    Ok(Json(updated))
}

/// PUT /api/v1/booking/cancel/:uuid - move BOOKED to CANCELED
pub async fn cancel(
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> AppResult<StatusCode> {
    booking::cancel(&state.pool, &uuid).await?;
    Ok(StatusCode::OK)
}

/// PUT /api/v1/booking/rebook/:uuid - move CANCELED back to BOOKED
pub async fn rebook(
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> AppResult<StatusCode> {
    booking::rebook(&state.pool, &uuid).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/v1/booking/:uuid - delete permanently
pub async fn delete(
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> AppResult<StatusCode> {
    booking::delete(&state.pool, &uuid).await?;
    Ok(StatusCode::NO_CONTENT)
}
