//! Block API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/block", routes())
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
}
