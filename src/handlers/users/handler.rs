//! User handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::{error::AppResult, handlers::pagination::PaginationQuery, state::AppState};

use super::{
    request::{CreateUserRequest, LoginRequest, UpdateUserRequest},
    response::{LoginResponse, UserResponse},
};

/// List non-deleted users (paginated)
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.users().list_users(query.into_pagination()?).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = state.users().get_user(id).await?;
    Ok(Json(user.into()))
}

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = state.users().register(payload.into()).await?;
    Ok(Json(user.into()))
}

/// Replace nickname, email and optionally the password
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = state.users().update_user(id, payload.into()).await?;
    Ok(Json(user.into()))
}

/// Soft-delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<i32>> {
    let id = state.users().delete_user(id).await?;
    Ok(Json(id))
}

/// Exchange credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    let issued = state
        .users()
        .login(&payload.email, &payload.password)
        .await?;
    Ok(Json(issued.into()))
}
