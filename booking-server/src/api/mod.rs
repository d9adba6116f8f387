//! API route module
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`bookings`] - guest-bearing reservations (`/api/v1/booking`)
//! - [`blocks`] - administrative holds (`/api/v1/block`)

pub mod blocks;
pub mod bookings;
pub mod health;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;

/// Create the combined router
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(bookings::router())
        .merge(blocks::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
