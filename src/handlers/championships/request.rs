//! Championship request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{constants::MAX_CHAMPIONSHIP_NAME_LENGTH, models::ChampionshipDraft};

/// Body of both create and update requests
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChampionshipRequest {
    #[validate(length(min = 1, max = MAX_CHAMPIONSHIP_NAME_LENGTH))]
    pub name: String,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub team_a_points: i32,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub team_b_points: i32,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub team_c_points: i32,
}

impl ChampionshipRequest {
    /// Map to a draft carrying a freshly minted identifier
    pub fn into_draft(self) -> ChampionshipDraft {
        ChampionshipDraft {
            id: Uuid::new_v4(),
            name: self.name,
            team_a_points: self.team_a_points,
            team_b_points: self.team_b_points,
            team_c_points: self.team_c_points,
        }
    }
}
