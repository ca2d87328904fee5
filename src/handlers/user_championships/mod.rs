//! Per-user championship record handlers

mod handler;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// User championship routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{championship_id}/users", get(handler::list_user_ids))
        .route(
            "/{championship_id}/users/{user_id}",
            get(handler::get_record)
                .post(handler::create_record)
                .put(handler::update_record)
                .delete(handler::delete_record),
        )
}
