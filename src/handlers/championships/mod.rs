//! Championship handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Championship routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_championships).post(handler::create_championship),
        )
        .route(
            "/{id}",
            get(handler::get_championship)
                .put(handler::update_championship)
                .delete(handler::delete_championship),
        )
}
