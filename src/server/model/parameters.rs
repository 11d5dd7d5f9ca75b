//! League parameter domain model.
//!
//! The league runs off a single configuration row. It is loaded once per operation and
//! passed explicitly into every rule check, never cached as process-wide state.

use crate::{
    model::parameters::{LeagueParametersDto, UpdateLeagueParametersDto},
    server::{error::AppError, rules::standings::StandingCriterion},
};

/// Primary key of the singleton parameter row.
pub const PARAMETERS_ID: i32 = 1;

/// League-wide eligibility bounds and scoring configuration.
///
/// Every bound is inclusive and independently optional; `None` means unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueParameters {
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
    /// Standings tie-break criteria in priority order.
    pub category_sort: Vec<StandingCriterion>,
}

impl Default for LeagueParameters {
    /// Unbounded league with 3/1/0 scoring and the default tie-break order.
    fn default() -> Self {
        Self {
            min_age: None,
            max_age: None,
            min_players: None,
            max_players: None,
            max_foreign_players: None,
            min_goal_minute: None,
            max_goal_minute: None,
            win_score: 3,
            draw_score: 1,
            lose_score: 0,
            category_sort: StandingCriterion::default_order(),
        }
    }
}

impl LeagueParameters {
    /// Converts the parameter row to a domain model at the repository boundary.
    ///
    /// Unknown tie-break names in the stored `category_sort` are skipped with a
    /// warning rather than failing the load.
    pub fn from_entity(entity: entity::league_parameters::Model) -> Self {
        Self {
            min_age: entity.min_age,
            max_age: entity.max_age,
            min_players: entity.min_players,
            max_players: entity.max_players,
            max_foreign_players: entity.max_foreign_players,
            min_goal_minute: entity.min_goal_minute,
            max_goal_minute: entity.max_goal_minute,
            win_score: entity.win_score,
            draw_score: entity.draw_score,
            lose_score: entity.lose_score,
            category_sort: StandingCriterion::parse_list(&entity.category_sort),
        }
    }

    pub fn into_dto(self) -> LeagueParametersDto {
        LeagueParametersDto {
            min_age: self.min_age,
            max_age: self.max_age,
            min_players: self.min_players,
            max_players: self.max_players,
            max_foreign_players: self.max_foreign_players,
            min_goal_minute: self.min_goal_minute,
            max_goal_minute: self.max_goal_minute,
            win_score: self.win_score,
            draw_score: self.draw_score,
            lose_score: self.lose_score,
            category_sort: self
                .category_sort
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        }
    }
}

/// Parameters for replacing the league configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateLeagueParametersParams {
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
    pub category_sort: Vec<StandingCriterion>,
}

impl UpdateLeagueParametersParams {
    /// Converts the request DTO, rejecting unknown tie-break criterion names.
    ///
    /// # Returns
    /// - `Ok(UpdateLeagueParametersParams)` - All criterion names recognised
    /// - `Err(AppError::BadRequest)` - At least one criterion name is unknown
    pub fn from_dto(dto: UpdateLeagueParametersDto) -> Result<Self, AppError> {
        let category_sort = dto
            .category_sort
            .iter()
            .map(|name| {
                name.parse::<StandingCriterion>()
                    .map_err(|_| AppError::BadRequest(format!("Unknown sort criterion '{}'", name)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            min_age: dto.min_age,
            max_age: dto.max_age,
            min_players: dto.min_players,
            max_players: dto.max_players,
            max_foreign_players: dto.max_foreign_players,
            min_goal_minute: dto.min_goal_minute,
            max_goal_minute: dto.max_goal_minute,
            win_score: dto.win_score,
            draw_score: dto.draw_score,
            lose_score: dto.lose_score,
            category_sort,
        })
    }
}

#[cfg(test)]
mod tests {
    use test_utils::fixture;

    use super::*;

    #[test]
    fn stored_row_matches_defaults() {
        let parameters = LeagueParameters::from_entity(fixture::league_parameters::entity());

        assert_eq!(parameters, LeagueParameters::default());
    }

    #[test]
    fn unknown_stored_criteria_are_skipped() {
        let mut row = fixture::league_parameters::entity();
        row.category_sort = "goals_for,fair_play".to_string();

        let parameters = LeagueParameters::from_entity(row);

        assert_eq!(parameters.category_sort, vec![StandingCriterion::GoalsFor]);
    }

    #[test]
    fn update_rejects_unknown_criterion() {
        let mut dto = LeagueParameters::default().into_dto();
        dto.category_sort.push("fair_play".to_string());

        let result = UpdateLeagueParametersParams::from_dto(UpdateLeagueParametersDto {
            min_age: dto.min_age,
            max_age: dto.max_age,
            min_players: dto.min_players,
            max_players: dto.max_players,
            max_foreign_players: dto.max_foreign_players,
            min_goal_minute: dto.min_goal_minute,
            max_goal_minute: dto.max_goal_minute,
            win_score: dto.win_score,
            draw_score: dto.draw_score,
            lose_score: dto.lose_score,
            category_sort: dto.category_sort,
        });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
