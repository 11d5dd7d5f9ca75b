use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GoalTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WinnerDto {
    Team1,
    Team2,
    Draw,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GoalDto {
    pub id: i32,
    pub minute: i32,
    pub team_id: i32,
    pub team_name: String,
    pub player_id: i32,
    pub player_name: String,
    pub goal_type_id: i32,
    pub goal_type_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MatchDto {
    pub id: i32,
    pub season_id: Option<i32>,
    pub team1_id: i32,
    pub team1_name: String,
    pub team2_id: i32,
    pub team2_name: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = i64)]
    pub match_time: DateTime<Utc>,
    pub stadium: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MatchResultDto {
    #[serde(rename = "match")]
    pub fixture: MatchDto,
    pub team1_goals: u32,
    pub team2_goals: u32,
    pub winner: WinnerDto,
    pub goals: Vec<GoalDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMatchDto {
    pub season_id: Option<i32>,
    pub team1_id: i32,
    pub team2_id: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = i64)]
    pub match_time: DateTime<Utc>,
    pub stadium: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateGoalDto {
    pub team_id: i32,
    pub player_id: i32,
    pub goal_type_id: i32,
    pub minute: i32,
}
