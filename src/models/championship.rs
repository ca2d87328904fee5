//! Championship model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Championship document as kept in the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Championship {
    pub id: Uuid,
    pub name: String,
    pub date_of_creation: DateTime<Utc>,
    pub team_a_points: i32,
    pub team_b_points: i32,
    pub team_c_points: i32,
    #[serde(default)]
    pub deleted: bool,
}

/// Championship fields supplied by a client on create or update
#[derive(Debug, Clone)]
pub struct ChampionshipDraft {
    /// Identifier minted by the request mapping on create; ignored on update
    pub id: Uuid,
    pub name: String,
    pub team_a_points: i32,
    pub team_b_points: i32,
    pub team_c_points: i32,
}

impl Championship {
    /// Build a new, non-deleted document from a draft
    pub fn from_draft(draft: ChampionshipDraft, date_of_creation: DateTime<Utc>) -> Self {
        Self {
            id: draft.id,
            name: draft.name,
            date_of_creation,
            team_a_points: draft.team_a_points,
            team_b_points: draft.team_b_points,
            team_c_points: draft.team_c_points,
            deleted: false,
        }
    }

    /// Replace the client-editable fields, keeping identity and creation time
    pub fn apply(&mut self, draft: ChampionshipDraft) {
        self.name = draft.name;
        self.team_a_points = draft.team_a_points;
        self.team_b_points = draft.team_b_points;
        self.team_c_points = draft.team_c_points;
    }
}
