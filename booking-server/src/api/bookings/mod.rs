//! Booking API module

pub(crate) mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/booking", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", axum::routing::post(handler::create))
        .route(
            "/{uuid}",
            get(handler::get_by_uuid)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/cancel/{uuid}", put(handler::cancel))
        .route("/rebook/{uuid}", put(handler::rebook))
}
