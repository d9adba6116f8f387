//! Block API Handlers
//!
//! Same payload shape as the booking endpoints, but the guest list is not
//! required: blocks never carry guests, so whatever the payload contains is
//! only checked for well-formedness and then ignored by the workflow.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use shared::models::{ReservationRequest, ReservationResponse};

use crate::api::bookings::handler::{validate_dates, validate_guest};
use crate::core::ServerState;
use crate::reservations::block;
use crate::utils::AppResult;

fn validate_payload(payload: &ReservationRequest) -> AppResult<()> {
    validate_dates(payload)?;
    for guest in &payload.guests {
        validate_guest(guest)?;
    }
    Ok(())
}

/// POST /api/v1/block - create a new block
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationRequest>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&payload)?;
    let created = block::create(&state.pool, &payload).await?;
    let location = format!("/api/v1/block/{}", created.uuid);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// GET /api/v1/block/:uuid - fetch a block
pub async fn get_by_uuid(
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> AppResult<Json<ReservationResponse>> {
    let found = block::get(&state.pool, &uuid).await?;
    Ok(Json(found))
}

/// PUT /api/v1/block/:uuid - update block dates
pub async fn update(
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<ReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    validate_payload(&payload)?;
    let updated = block::update(&state.pool, &uuid, &payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/block/:uuid - delete permanently
pub async fn delete(
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> AppResult<StatusCode> {
    block::delete(&state.pool, &uuid).await?;
    Ok(StatusCode::NO_CONTENT)
}
