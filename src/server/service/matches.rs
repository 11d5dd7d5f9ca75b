use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        matches::{GoalRepository, GoalTypeRepository, MatchRepository},
        parameters::LeagueParametersRepository,
        player::PlayerRepository,
        season::SeasonRepository,
        team::TeamRepository,
    },
    error::{matches::MatchError, AppError},
    model::matches::{
        CreateGoalParams, CreateMatchParams, GoalDetail, GoalType, MatchDetail, MatchWithTeams,
    },
    rules::{
        goal::{validate_match_sides, GoalRules},
        result::compute_match_result,
    },
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a match between two distinct existing teams.
    ///
    /// # Returns
    /// - `Ok(MatchWithTeams)` - Created match
    /// - `Err(AppError::MatchErr)` - Same team twice or a team does not exist
    /// - `Err(AppError::NotFound)` - The referenced season does not exist
    pub async fn create(&self, params: CreateMatchParams) -> Result<MatchWithTeams, AppError> {
        let teams = TeamRepository::new(self.db);
        let team1 = teams.get_by_id(params.team1_id).await?;
        let team2 = teams.get_by_id(params.team2_id).await?;
        validate_match_sides(
            params.team1_id,
            params.team2_id,
            team1.as_ref(),
            team2.as_ref(),
        )?;

        if let Some(season_id) = params.season_id {
            if SeasonRepository::new(self.db)
                .get_by_id(season_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(format!("Season {} not found", season_id)));
            }
        }

        let fixture = MatchRepository::new(self.db).create(params).await?;

        Ok(MatchWithTeams {
            fixture,
            team1_name: team1.map(|t| t.name).unwrap_or_default(),
            team2_name: team2.map(|t| t.name).unwrap_or_default(),
        })
    }

    /// Gets a match with its score and winner derived from the recorded goals.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<MatchDetail>, AppError> {
        let Some(fixture) = MatchRepository::new(self.db).get_with_teams(id).await? else {
            return Ok(None);
        };
        let goals = GoalRepository::new(self.db).get_details_by_match(id).await?;

        let result = compute_match_result(&fixture.fixture, goals);

        Ok(Some(MatchDetail { fixture, result }))
    }

    /// Gets all matches in kickoff order, optionally limited to one season.
    pub async fn get_all(&self, season_id: Option<i32>) -> Result<Vec<MatchWithTeams>, AppError> {
        Ok(MatchRepository::new(self.db).get_all(season_id).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(MatchRepository::new(self.db).delete(id).await?)
    }

    /// Records a goal event after the admissibility checks pass.
    ///
    /// The checks and the insert run in one transaction.
    ///
    /// # Returns
    /// - `Ok(GoalDetail)` - Recorded goal with resolved names
    /// - `Err(AppError::MatchErr)` - Match, player or goal type missing, or a rule
    ///   rejected the goal
    pub async fn add_goal(&self, params: CreateGoalParams) -> Result<GoalDetail, AppError> {
        let txn = self.db.begin().await?;

        let parameters = LeagueParametersRepository::new(&txn)
            .get()
            .await?
            .ok_or(MatchError::ConfigurationMissing)?;
        let fixture = MatchRepository::new(&txn)
            .get_by_id(params.match_id)
            .await?
            .ok_or(MatchError::MatchNotFound {
                match_id: params.match_id,
            })?;
        let player = PlayerRepository::new(&txn)
            .get_by_id(params.player_id)
            .await?;
        let goal_type = GoalTypeRepository::new(&txn)
            .get_by_id(params.goal_type_id)
            .await?;

        GoalRules::new(&parameters).validate_goal(
            &fixture,
            &params,
            player.as_ref(),
            goal_type.as_ref(),
        )?;

        let team_name = TeamRepository::new(&txn)
            .get_by_id(params.team_id)
            .await?
            .map(|t| t.name)
            .unwrap_or_default();
        let goal = GoalRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::debug!("Recorded goal {} in match {}", goal.id, goal.match_id);

        Ok(GoalDetail {
            goal,
            team_name,
            player_name: player.map(|p| p.name).unwrap_or_default(),
            goal_type_name: goal_type.map(|t| t.name).unwrap_or_default(),
        })
    }

    pub async fn delete_goal(&self, id: i32) -> Result<bool, AppError> {
        Ok(GoalRepository::new(self.db).delete(id).await?)
    }

    pub async fn list_goal_types(&self) -> Result<Vec<GoalType>, AppError> {
        Ok(GoalTypeRepository::new(self.db).get_all().await?)
    }
}
