//! Season domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::season::{CreateSeasonDto, SeasonDto, SeasonTeamDto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Season {
    pub fn from_entity(entity: entity::season::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_date: entity.start_date,
            end_date: entity.end_date,
        }
    }

    pub fn into_dto(self) -> SeasonDto {
        SeasonDto {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// A team's admission into a season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonTeam {
    pub season_id: i32,
    pub team_id: i32,
    pub registered_at: DateTime<Utc>,
}

impl SeasonTeam {
    pub fn from_entity(entity: entity::season_team::Model) -> Self {
        Self {
            season_id: entity.season_id,
            team_id: entity.team_id,
            registered_at: entity.registered_at,
        }
    }

    pub fn into_dto(self) -> SeasonTeamDto {
        SeasonTeamDto {
            season_id: self.season_id,
            team_id: self.team_id,
            registered_at: self.registered_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSeasonParams {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<CreateSeasonDto> for CreateSeasonParams {
    fn from(dto: CreateSeasonDto) -> Self {
        Self {
            name: dto.name,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}
