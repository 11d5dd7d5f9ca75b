use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::player::PlayerDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub stadium: Option<String>,
    pub coach: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamWithPlayersDto {
    pub id: i32,
    pub name: String,
    pub stadium: Option<String>,
    pub coach: Option<String>,
    pub players: Vec<PlayerDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    pub stadium: Option<String>,
    pub coach: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTeamDto {
    pub name: Option<String>,
    pub stadium: Option<String>,
    pub coach: Option<String>,
}
