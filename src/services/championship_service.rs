//! Championship service

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::repositories::ChampionshipRepository,
    error::{AppError, AppResult},
    models::{Championship, ChampionshipDraft, Pagination},
    utils::require_filled,
};

/// Championship service for business logic
pub struct ChampionshipService {
    repo: Arc<dyn ChampionshipRepository>,
}

impl ChampionshipService {
    pub fn new(repo: Arc<dyn ChampionshipRepository>) -> Self {
        Self { repo }
    }

    /// Create a championship; its name must be free among non-deleted ones
    pub async fn create(&self, draft: ChampionshipDraft) -> AppResult<Championship> {
        Self::validate_draft(&draft)?;

        if self.repo.find_active_by_name(&draft.name).await?.is_some() {
            tracing::warn!(name = %draft.name, "Championship name already taken");
            return Err(AppError::AlreadyExists(format!(
                "Championship '{}' already exists",
                draft.name
            )));
        }

        let championship = Championship::from_draft(draft, Utc::now());
        let created = self.repo.create(&championship).await?;
        tracing::info!(championship_id = %created.id, "Championship created");

        Ok(created)
    }

    /// List non-deleted championships, one page at a time
    pub async fn list(&self, pagination: Pagination) -> AppResult<Vec<Championship>> {
        self.repo
            .list_active(pagination.offset(), pagination.limit())
            .await
    }

    /// Get a non-deleted championship by ID
    pub async fn get(&self, id: Uuid) -> AppResult<Championship> {
        self.repo
            .find_by_id(id)
            .await?
            .filter(|championship| !championship.deleted)
            .ok_or_else(|| AppError::NotFound(format!("Championship {} not found", id)))
    }

    /// Replace name and points of a championship
    pub async fn update(&self, id: Uuid, draft: ChampionshipDraft) -> AppResult<Championship> {
        let mut championship = self.get(id).await?;
        Self::validate_draft(&draft)?;

        if let Some(holder) = self.repo.find_active_by_name(&draft.name).await? {
            if holder.id != id {
                tracing::warn!(name = %draft.name, "Rename rejected: name already taken");
                return Err(AppError::AlreadyExists(format!(
                    "Championship '{}' already exists",
                    draft.name
                )));
            }
        }

        championship.apply(draft);
        let updated = self.repo.update(&championship).await?;
        tracing::info!(championship_id = %id, "Championship updated");

        Ok(updated)
    }

    /// Soft-delete a championship, returning its ID
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<Uuid> {
        if !self.repo.soft_delete(id).await? {
            return Err(AppError::NotFound(format!("Championship {} not found", id)));
        }

        tracing::info!(championship_id = %id, "Championship soft-deleted");
        Ok(id)
    }

    fn validate_draft(draft: &ChampionshipDraft) -> AppResult<()> {
        require_filled(&[("name", draft.name.as_str())])?;

        if draft.team_a_points < 0 || draft.team_b_points < 0 || draft.team_c_points < 0 {
            return Err(AppError::Validation(
                "Team points must be 0 or greater".to_string(),
            ));
        }

        Ok(())
    }
}
