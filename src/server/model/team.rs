//! Team domain models and parameters.

use crate::{
    model::team::{CreateTeamDto, TeamDto, TeamWithPlayersDto, UpdateTeamDto},
    server::model::player::Player,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub stadium: Option<String>,
    pub coach: Option<String>,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            stadium: entity.stadium,
            coach: entity.coach,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            stadium: self.stadium,
            coach: self.coach,
        }
    }

    /// Converts the team together with its roster for the team detail view.
    pub fn into_dto_with_players(self, players: Vec<Player>) -> TeamWithPlayersDto {
        TeamWithPlayersDto {
            id: self.id,
            name: self.name,
            stadium: self.stadium,
            coach: self.coach,
            players: players.into_iter().map(Player::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub stadium: Option<String>,
    pub coach: Option<String>,
}

impl From<CreateTeamDto> for CreateTeamParams {
    fn from(dto: CreateTeamDto) -> Self {
        Self {
            name: dto.name,
            stadium: dto.stadium,
            coach: dto.coach,
        }
    }
}

/// Parameters for updating a team; `None` leaves the field unchanged.
#[derive(Debug, Clone)]
pub struct UpdateTeamParams {
    pub id: i32,
    pub name: Option<String>,
    pub stadium: Option<String>,
    pub coach: Option<String>,
}

impl UpdateTeamParams {
    pub fn from_dto(id: i32, dto: UpdateTeamDto) -> Self {
        Self {
            id,
            name: dto.name,
            stadium: dto.stadium,
            coach: dto.coach,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_utils::fixture;

    use super::*;

    #[test]
    fn into_dto_with_players_keeps_roster() {
        let team = Team::from_entity(fixture::team::entity());
        let player = Player::from_entity(
            fixture::player::entity(),
            Some(fixture::player::player_type(1, "domestic")),
        )
        .unwrap();

        let dto = team.into_dto_with_players(vec![player]);

        assert_eq!(dto.name, fixture::team::DEFAULT_NAME);
        assert_eq!(dto.players.len(), 1);
    }
}
