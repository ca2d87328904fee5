//! Per-user championship records
//!
//! A record is an opaque JSON blob stored under a key derived from the
//! championship and user ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Reference to one user's record within a championship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChampionship {
    pub championship_id: Uuid,
    pub user_id: i32,
}

impl UserChampionship {
    pub fn new(championship_id: Uuid, user_id: i32) -> Self {
        Self {
            championship_id,
            user_id,
        }
    }

    /// Blob key: championship id as 32 lowercase hex digits, `_`, user id
    pub fn blob_name(&self) -> String {
        format!("{}_{}", Self::blob_prefix(&self.championship_id), self.user_id)
    }

    /// Prefix shared by every record of a championship
    pub fn blob_prefix(championship_id: &Uuid) -> String {
        championship_id.simple().to_string()
    }

    /// Extract the user id from a blob key, if it has the expected shape
    pub fn user_id_from_blob_name(name: &str) -> Option<i32> {
        name.rsplit_once('_')
            .and_then(|(_, suffix)| suffix.parse().ok())
    }
}

/// Content of a per-user championship record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserChampionshipContent {
    pub join_date: DateTime<Utc>,
    pub score: i32,
    #[validate(length(min = 1))]
    pub role: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    #[validate(nested)]
    pub matches: Vec<MatchParticipation>,
}

/// A single match the user took part in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchParticipation {
    pub match_date: DateTime<Utc>,
    #[validate(range(min = 0))]
    pub goals_scored: i32,
    #[validate(range(min = 0))]
    pub assists: i32,
    #[serde(default)]
    pub position: Option<String>,
}
