//! Championship repository
//!
//! Championships live in Redis as JSON documents. Every write keeps two
//! indexes in step with the documents:
//! - `championships:active`, a sorted set of non-deleted ids scored by
//!   creation time, which backs store-side paging
//! - `championships:names`, a hash of non-deleted name -> id, claimed with
//!   HSETNX so two writers cannot both take the same name

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use uuid::Uuid;

use crate::{
    constants::championship_keys::{ACTIVE_INDEX, DOCUMENT_PREFIX, NAME_INDEX},
    error::{AppError, AppResult},
    models::Championship,
};

/// Storage operations for championships
#[async_trait]
pub trait ChampionshipRepository: Send + Sync {
    /// Store a new championship document
    async fn create(&self, championship: &Championship) -> AppResult<Championship>;

    /// Load a championship by id, soft-deleted or not
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Championship>>;

    /// Load the non-deleted championship holding `name`
    async fn find_active_by_name(&self, name: &str) -> AppResult<Option<Championship>>;

    /// Page through non-deleted championships in creation order
    async fn list_active(&self, offset: i64, limit: i64) -> AppResult<Vec<Championship>>;

    /// Replace a stored document
    async fn update(&self, championship: &Championship) -> AppResult<Championship>;

    /// Flag a championship as deleted, returning whether it existed
    async fn soft_delete(&self, id: Uuid) -> AppResult<bool>;
}

fn document_key(id: &Uuid) -> String {
    format!("{}{}", DOCUMENT_PREFIX, id)
}

/// Inclusive ZRANGE indexes for a page, or `None` when the page is empty
fn zrange_bounds(offset: i64, limit: i64) -> Option<(isize, isize)> {
    if offset < 0 || limit <= 0 {
        return None;
    }

    let start = isize::try_from(offset).ok()?;
    let stop = isize::try_from(offset.saturating_add(limit - 1)).unwrap_or(isize::MAX);
    Some((start, stop))
}

fn name_taken(name: &str) -> AppError {
    AppError::AlreadyExists(format!("Championship '{}' already exists", name))
}

/// Redis-backed championship repository
#[derive(Clone)]
pub struct RedisChampionshipRepository {
    conn: ConnectionManager,
}

impl RedisChampionshipRepository {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Take `name` for `id` in the name index. Succeeds when the name is free
    /// or already held by the same championship.
    async fn claim_name(&self, name: &str, id: &Uuid) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let claimed: bool = conn.hset_nx(NAME_INDEX, name, id.to_string()).await?;
        if claimed {
            return Ok(());
        }

        let holder: Option<String> = conn.hget(NAME_INDEX, name).await?;
        if holder.as_deref() == Some(id.to_string().as_str()) {
            Ok(())
        } else {
            Err(name_taken(name))
        }
    }

    /// Undo a name claim after a failed write
    async fn release_name(&self, name: &str) {
        let mut conn = self.conn.clone();
        let released: redis::RedisResult<()> = conn.hdel(NAME_INDEX, name).await;
        if let Err(e) = released {
            tracing::warn!(name = %name, "Failed to release championship name claim: {}", e);
        }
    }

    fn parse_document(raw: &str) -> AppResult<Championship> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[async_trait]
impl ChampionshipRepository for RedisChampionshipRepository {
    async fn create(&self, championship: &Championship) -> AppResult<Championship> {
        self.claim_name(&championship.name, &championship.id).await?;

        let document = serde_json::to_string(championship)?;
        let mut conn = self.conn.clone();
        let written: redis::RedisResult<()> = redis::pipe()
            .atomic()
            .set(document_key(&championship.id), document)
            .ignore()
            .zadd(
                ACTIVE_INDEX,
                championship.id.to_string(),
                championship.date_of_creation.timestamp_millis(),
            )
            .ignore()
            .query_async(&mut conn)
            .await;

        if let Err(e) = written {
            self.release_name(&championship.name).await;
            return Err(e.into());
        }

        Ok(championship.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Championship>> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(document_key(&id)).await?;

        raw.as_deref().map(Self::parse_document).transpose()
    }

    async fn find_active_by_name(&self, name: &str) -> AppResult<Option<Championship>> {
        let mut conn = self.conn.clone();
        let holder: Option<String> = conn.hget(NAME_INDEX, name).await?;

        let Some(id) = holder.and_then(|raw| Uuid::parse_str(&raw).ok()) else {
            return Ok(None);
        };

        Ok(self
            .find_by_id(id)
            .await?
            .filter(|championship| !championship.deleted))
    }

    async fn list_active(&self, offset: i64, limit: i64) -> AppResult<Vec<Championship>> {
        let Some((start, stop)) = zrange_bounds(offset, limit) else {
            return Ok(Vec::new());
        };

        let mut conn = self.conn.clone();
        let ids: Vec<String> = conn.zrange(ACTIVE_INDEX, start, stop).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = ids
            .iter()
            .map(|id| format!("{}{}", DOCUMENT_PREFIX, id))
            .collect();
        let documents: Vec<Option<String>> = conn.mget(&keys).await?;

        let mut championships = Vec::with_capacity(documents.len());
        for (id, raw) in ids.iter().zip(documents) {
            match raw {
                Some(raw) => championships.push(Self::parse_document(&raw)?),
                None => tracing::warn!(championship_id = %id, "Active index points at a missing document"),
            }
        }

        Ok(championships)
    }

    async fn update(&self, championship: &Championship) -> AppResult<Championship> {
        let existing = self
            .find_by_id(championship.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Championship not found".to_string()))?;

        let renamed = existing.name != championship.name;
        if renamed && !championship.deleted {
            self.claim_name(&championship.name, &championship.id).await?;
        }

        let document = serde_json::to_string(championship)?;
        let mut pipe = redis::pipe();
        pipe.atomic().set(document_key(&championship.id), document).ignore();
        if renamed && !existing.deleted {
            pipe.hdel(NAME_INDEX, &existing.name).ignore();
        }

        let mut conn = self.conn.clone();
        let written: redis::RedisResult<()> = pipe.query_async(&mut conn).await;
        if let Err(e) = written {
            if renamed && !championship.deleted {
                self.release_name(&championship.name).await;
            }
            return Err(e.into());
        }

        Ok(championship.clone())
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<bool> {
        let Some(mut championship) = self.find_by_id(id).await? else {
            return Ok(false);
        };

        // Already deleted: its name may now belong to a newer championship
        if championship.deleted {
            return Ok(true);
        }

        championship.deleted = true;
        let document = serde_json::to_string(&championship)?;

        let mut conn = self.conn.clone();
        let _: () = redis::pipe()
            .atomic()
            .set(document_key(&id), document)
            .ignore()
            .zrem(ACTIVE_INDEX, id.to_string())
            .ignore()
            .hdel(NAME_INDEX, &championship.name)
            .ignore()
            .query_async(&mut conn)
            .await?;

        Ok(true)
    }
}
