//! Player and player type domain models.
//!
//! A player's nationality class is derived from its player type: a type named
//! `foreign` (any letter case) counts against the league's foreign-player quota,
//! every other type counts as domestic.

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::model::player::{CreatePlayerDto, PlayerDto, PlayerTypeDto, UpdatePlayerDto};

/// Player type name that marks a player as foreign for quota purposes.
pub const FOREIGN_PLAYER_TYPE: &str = "foreign";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerType {
    pub id: i32,
    pub name: String,
}

impl PlayerType {
    pub fn from_entity(entity: entity::player_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Whether players of this type count against the foreign-player quota.
    pub fn is_foreign(&self) -> bool {
        self.name.to_lowercase() == FOREIGN_PLAYER_TYPE
    }

    pub fn into_dto(self) -> PlayerTypeDto {
        PlayerTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// A rostered player together with its resolved player type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i32,
    pub team_id: i32,
    pub player_type: PlayerType,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub shirt_number: Option<i32>,
    pub note: Option<String>,
}

impl Player {
    /// Converts a player row and its joined type row at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Player)` - Player with its type resolved
    /// - `Err(DbErr::RecordNotFound)` - The join produced no player type row
    pub fn from_entity(
        entity: entity::player::Model,
        player_type: Option<entity::player_type::Model>,
    ) -> Result<Self, DbErr> {
        let player_type = player_type.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Player type {} for player {} not found",
                entity.player_type_id, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            team_id: entity.team_id,
            player_type: PlayerType::from_entity(player_type),
            name: entity.name,
            birth_date: entity.birth_date,
            shirt_number: entity.shirt_number,
            note: entity.note,
        })
    }

    pub fn is_foreign(&self) -> bool {
        self.player_type.is_foreign()
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            team_id: self.team_id,
            player_type: self.player_type.into_dto(),
            name: self.name,
            birth_date: self.birth_date,
            shirt_number: self.shirt_number,
            note: self.note,
        }
    }
}

/// Parameters for registering a new player on a team.
#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub team_id: i32,
    pub player_type_id: i32,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub shirt_number: Option<i32>,
    pub note: Option<String>,
}

impl From<CreatePlayerDto> for CreatePlayerParams {
    fn from(dto: CreatePlayerDto) -> Self {
        Self {
            team_id: dto.team_id,
            player_type_id: dto.player_type_id,
            name: dto.name,
            birth_date: dto.birth_date,
            shirt_number: dto.shirt_number,
            note: dto.note,
        }
    }
}

/// Parameters for updating a player.
///
/// All fields are optional; only provided fields are changed. A provided
/// `birth_date` is re-validated against the league age bounds, an omitted one
/// is left untouched and never re-checked.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlayerParams {
    pub id: i32,
    pub team_id: Option<i32>,
    pub player_type_id: Option<i32>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub shirt_number: Option<i32>,
    pub note: Option<String>,
}

impl UpdatePlayerParams {
    pub fn from_dto(id: i32, dto: UpdatePlayerDto) -> Self {
        Self {
            id,
            team_id: dto.team_id,
            player_type_id: dto.player_type_id,
            name: dto.name,
            birth_date: dto.birth_date,
            shirt_number: dto.shirt_number,
            note: dto.note,
        }
    }
}
