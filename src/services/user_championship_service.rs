//! Per-user championship records backed by blob storage

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{UserChampionship, UserChampionshipContent},
    services::{ChampionshipService, UserService},
    storage::{BlobReader, BlobStorage},
};

pub struct UserChampionshipService {
    users: Arc<UserService>,
    championships: Arc<ChampionshipService>,
    blobs: Arc<dyn BlobStorage>,
}

impl UserChampionshipService {
    pub fn new(
        users: Arc<UserService>,
        championships: Arc<ChampionshipService>,
        blobs: Arc<dyn BlobStorage>,
    ) -> Self {
        Self {
            users,
            championships,
            blobs,
        }
    }

    /// Create an empty record unless one exists already
    pub async fn create(&self, championship_id: Uuid, user_id: i32) -> AppResult<UserChampionship> {
        let record = self.resolve(championship_id, user_id).await?;
        let name = record.blob_name();

        if self.blobs.exists(&name).await? {
            tracing::debug!(blob = %name, "User championship record already present");
        } else {
            self.blobs.create_empty(&name).await?;
            tracing::info!(
                championship_id = %championship_id,
                user_id,
                "User championship record created"
            );
        }

        Ok(record)
    }

    /// User ids holding a record in this championship, ascending
    pub async fn list_user_ids(&self, championship_id: Uuid) -> AppResult<Vec<i32>> {
        self.championships.get(championship_id).await?;

        let prefix = UserChampionship::blob_prefix(&championship_id);
        let names = self.blobs.list_names(&prefix).await?;

        let mut user_ids: Vec<i32> = names
            .iter()
            .filter_map(|name| {
                let parsed = UserChampionship::user_id_from_blob_name(name);
                if parsed.is_none() {
                    tracing::warn!(blob = %name, "Skipping blob with unexpected name");
                }
                parsed
            })
            .collect();
        user_ids.sort_unstable();

        Ok(user_ids)
    }

    /// Open the record content for streaming
    pub async fn open(&self, championship_id: Uuid, user_id: i32) -> AppResult<BlobReader> {
        let record = self.resolve(championship_id, user_id).await?;
        self.blobs.open(&record.blob_name()).await
    }

    /// Replace the record content
    pub async fn update(
        &self,
        championship_id: Uuid,
        user_id: i32,
        content: UserChampionshipContent,
    ) -> AppResult<()> {
        content.validate()?;
        let record = self.resolve(championship_id, user_id).await?;

        let body = serde_json::to_vec(&content)?;
        self.blobs.overwrite(&record.blob_name(), body).await?;
        tracing::info!(
            championship_id = %championship_id,
            user_id,
            "User championship record updated"
        );

        Ok(())
    }

    /// Remove the record
    pub async fn delete(&self, championship_id: Uuid, user_id: i32) -> AppResult<()> {
        let record = self.resolve(championship_id, user_id).await?;

        self.blobs.delete(&record.blob_name()).await?;
        tracing::info!(
            championship_id = %championship_id,
            user_id,
            "User championship record deleted"
        );

        Ok(())
    }

    async fn resolve(&self, championship_id: Uuid, user_id: i32) -> AppResult<UserChampionship> {
        self.users.get_user(user_id).await?;
        self.championships.get(championship_id).await?;
        Ok(UserChampionship::new(championship_id, user_id))
    }
}
