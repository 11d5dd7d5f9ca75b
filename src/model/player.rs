use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub team_id: i32,
    pub player_type: PlayerTypeDto,
    pub name: String,
    pub birth_date: Option<NaiveDate>, // Format: "YYYY-MM-DD"
    pub shirt_number: Option<i32>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePlayerDto {
    pub team_id: i32,
    pub player_type_id: i32,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub shirt_number: Option<i32>,
    pub note: Option<String>,
}

/// Partial player update; only provided fields change.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdatePlayerDto {
    pub team_id: Option<i32>,
    pub player_type_id: Option<i32>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub shirt_number: Option<i32>,
    pub note: Option<String>,
}
