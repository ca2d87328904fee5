//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod championships;
pub mod health;
pub mod pagination;
pub mod user_championships;
pub mod users;

use axum::{middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{middleware::logging_middleware, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/api/users", users::routes())
        .nest("/users", users::routes())
        .nest("/api/v1/championships", championships::routes())
        .nest("/api/v1/user-championships", user_championships::routes())
}

/// Routes with the HTTP layers applied and state attached
pub fn app(state: AppState) -> Router {
    routes()
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
