//! Championship handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppResult, handlers::pagination::PaginationQuery, state::AppState};

use super::{request::ChampionshipRequest, response::ChampionshipResponse};

/// List non-deleted championships (paginated)
pub async fn list_championships(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<Vec<ChampionshipResponse>>> {
    let championships = state
        .championships()
        .list(query.into_pagination()?)
        .await?;

    Ok(Json(
        championships
            .into_iter()
            .map(ChampionshipResponse::from)
            .collect(),
    ))
}

/// Get a championship by ID
pub async fn get_championship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ChampionshipResponse>> {
    let championship = state.championships().get(id).await?;
    Ok(Json(championship.into()))
}

/// Create a championship
pub async fn create_championship(
    State(state): State<AppState>,
    Json(payload): Json<ChampionshipRequest>,
) -> AppResult<Json<ChampionshipResponse>> {
    payload.validate()?;

    let championship = state.championships().create(payload.into_draft()).await?;
    Ok(Json(championship.into()))
}

/// Replace name and points of a championship
pub async fn update_championship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChampionshipRequest>,
) -> AppResult<Json<ChampionshipResponse>> {
    payload.validate()?;

    let championship = state
        .championships()
        .update(id, payload.into_draft())
        .await?;
    Ok(Json(championship.into()))
}

/// Soft-delete a championship
pub async fn delete_championship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Uuid>> {
    let id = state.championships().soft_delete(id).await?;
    Ok(Json(id))
}
