//! Per-user championship record handlers

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tokio_util::io::ReaderStream;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{UserChampionship, UserChampionshipContent},
    state::AppState,
};

/// Create the record if absent
pub async fn create_record(
    State(state): State<AppState>,
    Path((championship_id, user_id)): Path<(Uuid, i32)>,
) -> AppResult<Json<UserChampionship>> {
    let record = state
        .user_championships()
        .create(championship_id, user_id)
        .await?;
    Ok(Json(record))
}

/// List user ids holding a record in the championship
pub async fn list_user_ids(
    State(state): State<AppState>,
    Path(championship_id): Path<Uuid>,
) -> AppResult<Json<Vec<i32>>> {
    let user_ids = state
        .user_championships()
        .list_user_ids(championship_id)
        .await?;
    Ok(Json(user_ids))
}

/// Stream the stored JSON content
pub async fn get_record(
    State(state): State<AppState>,
    Path((championship_id, user_id)): Path<(Uuid, i32)>,
) -> AppResult<impl IntoResponse> {
    let reader = state
        .user_championships()
        .open(championship_id, user_id)
        .await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        Body::from_stream(ReaderStream::new(reader)),
    ))
}

/// Overwrite the stored content
pub async fn update_record(
    State(state): State<AppState>,
    Path((championship_id, user_id)): Path<(Uuid, i32)>,
    Json(payload): Json<UserChampionshipContent>,
) -> AppResult<StatusCode> {
    state
        .user_championships()
        .update(championship_id, user_id, payload)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete the record
pub async fn delete_record(
    State(state): State<AppState>,
    Path((championship_id, user_id)): Path<(Uuid, i32)>,
) -> AppResult<StatusCode> {
    state
        .user_championships()
        .delete(championship_id, user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
