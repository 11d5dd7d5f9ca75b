//! Match and goal domain models.
//!
//! Matches and goals are stored as raw events; scores and winners are never persisted
//! and are always derived through `server::rules::result`.

use chrono::{DateTime, Utc};

use crate::{
    model::matches::{
        CreateGoalDto, CreateMatchDto, GoalDto, GoalTypeDto, MatchDto, MatchResultDto, WinnerDto,
    },
    server::rules::result::{MatchResult, Winner},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: i32,
    pub season_id: Option<i32>,
    pub team1_id: i32,
    pub team2_id: i32,
    pub match_time: DateTime<Utc>,
    pub stadium: Option<String>,
}

impl Match {
    pub fn from_entity(entity: entity::matches::Model) -> Self {
        Self {
            id: entity.id,
            season_id: entity.season_id,
            team1_id: entity.team1_id,
            team2_id: entity.team2_id,
            match_time: entity.match_time,
            stadium: entity.stadium,
        }
    }

    /// Whether the given team plays either side of this match.
    pub fn involves(&self, team_id: i32) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }
}

/// A match with both team names resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchWithTeams {
    pub fixture: Match,
    pub team1_name: String,
    pub team2_name: String,
}

impl MatchWithTeams {
    pub fn into_dto(self) -> MatchDto {
        MatchDto {
            id: self.fixture.id,
            season_id: self.fixture.season_id,
            team1_id: self.fixture.team1_id,
            team1_name: self.team1_name,
            team2_id: self.fixture.team2_id,
            team2_name: self.team2_name,
            match_time: self.fixture.match_time,
            stadium: self.fixture.stadium,
        }
    }
}

/// A match together with its derived result, the match detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDetail {
    pub fixture: MatchWithTeams,
    pub result: MatchResult,
}

impl MatchDetail {
    pub fn into_dto(self) -> MatchResultDto {
        MatchResultDto {
            fixture: self.fixture.into_dto(),
            team1_goals: self.result.team1_goals,
            team2_goals: self.result.team2_goals,
            winner: match self.result.winner {
                Winner::Team1 => WinnerDto::Team1,
                Winner::Team2 => WinnerDto::Team2,
                Winner::Draw => WinnerDto::Draw,
            },
            goals: self
                .result
                .goals
                .into_iter()
                .map(GoalDetail::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalType {
    pub id: i32,
    pub name: String,
}

impl GoalType {
    pub fn from_entity(entity: entity::goal_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> GoalTypeDto {
        GoalTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// A single recorded goal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: i32,
    pub match_id: i32,
    pub team_id: i32,
    pub player_id: i32,
    pub goal_type_id: i32,
    pub minute: i32,
}

impl Goal {
    pub fn from_entity(entity: entity::goal::Model) -> Self {
        Self {
            id: entity.id,
            match_id: entity.match_id,
            team_id: entity.team_id,
            player_id: entity.player_id,
            goal_type_id: entity.goal_type_id,
            minute: entity.minute,
        }
    }
}

/// Goal event enriched with team, player and goal type names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDetail {
    pub goal: Goal,
    pub team_name: String,
    pub player_name: String,
    pub goal_type_name: String,
}

impl GoalDetail {
    pub fn into_dto(self) -> GoalDto {
        GoalDto {
            id: self.goal.id,
            minute: self.goal.minute,
            team_id: self.goal.team_id,
            team_name: self.team_name,
            player_id: self.goal.player_id,
            player_name: self.player_name,
            goal_type_id: self.goal.goal_type_id,
            goal_type_name: self.goal_type_name,
        }
    }
}

/// A match together with all of its goal events, the input to the standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMatch {
    pub fixture: Match,
    pub goals: Vec<Goal>,
}

impl ScoredMatch {
    /// Number of goals credited to the given team in this match.
    pub fn goals_by(&self, team_id: i32) -> u32 {
        self.goals.iter().filter(|g| g.team_id == team_id).count() as u32
    }
}

#[derive(Debug, Clone)]
pub struct CreateMatchParams {
    pub season_id: Option<i32>,
    pub team1_id: i32,
    pub team2_id: i32,
    pub match_time: DateTime<Utc>,
    pub stadium: Option<String>,
}

impl From<CreateMatchDto> for CreateMatchParams {
    fn from(dto: CreateMatchDto) -> Self {
        Self {
            season_id: dto.season_id,
            team1_id: dto.team1_id,
            team2_id: dto.team2_id,
            match_time: dto.match_time,
            stadium: dto.stadium,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGoalParams {
    pub match_id: i32,
    pub team_id: i32,
    pub player_id: i32,
    pub goal_type_id: i32,
    pub minute: i32,
}

impl CreateGoalParams {
    pub fn from_dto(match_id: i32, dto: CreateGoalDto) -> Self {
        Self {
            match_id,
            team_id: dto.team_id,
            player_id: dto.player_id,
            goal_type_id: dto.goal_type_id,
            minute: dto.minute,
        }
    }
}
