use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LeagueParametersDto {
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
    pub max_foreign_players: Option<i32>,
    pub min_goal_minute: Option<i32>,
    pub max_goal_minute: Option<i32>,
    pub win_score: i32,
    pub draw_score: i32,
    pub lose_score: i32,
    /// Tie-break criteria in priority order, e.g. `["points", "goal_difference", "goals_for"]`.
    pub category_sort: Vec<String>,
}

/// Full replacement of the league parameters; omitted bounds become unbounded.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateLeagueParametersDto {
    #[serde(default)]
    pub min_age: Option<i32>,
    #[serde(default)]
    pub max_age: Option<i32>,
    #[serde(default)]
    pub min_players: Option<i32>,
    #[serde(default)]
    pub max_players: Option<i32>,
    #[serde(default)]
    pub max_foreign_players: Option<i32>,
    #[serde(default)]
    pub min_goal_minute: Option<i32>,
    #[serde(default)]
    pub max_goal_minute: Option<i32>,
    pub win_score: i32,
    pub draw_score: i32,
    pub lose_score: i32,
    #[serde(default)]
    pub category_sort: Vec<String>,
}
