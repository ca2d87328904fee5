//! Championship response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Championship;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionshipResponse {
    pub id: Uuid,
    pub name: String,
    pub date_of_creation: DateTime<Utc>,
    pub team_a_points: i32,
    pub team_b_points: i32,
    pub team_c_points: i32,
}

impl From<Championship> for ChampionshipResponse {
    fn from(championship: Championship) -> Self {
        Self {
            id: championship.id,
            name: championship.name,
            date_of_creation: championship.date_of_creation,
            team_a_points: championship.team_a_points,
            team_b_points: championship.team_b_points,
            team_c_points: championship.team_c_points,
        }
    }
}
