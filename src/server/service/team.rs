use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        matches::{GoalRepository, MatchRepository},
        player::PlayerRepository,
        team::TeamRepository,
    },
    error::AppError,
    model::{
        player::Player,
        team::{CreateTeamParams, Team, UpdateTeamParams},
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team; team names are unique.
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Team '{}' already exists",
                params.name
            )));
        }

        Ok(repo.create(params).await?)
    }

    /// Gets a team together with its roster.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<(Team, Vec<Player>)>, AppError> {
        let Some(team) = TeamRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };
        let players = PlayerRepository::new(self.db).get_by_team(id).await?;

        Ok(Some((team, players)))
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_all().await?)
    }

    /// Updates a team, `None` if it does not exist.
    pub async fn update(&self, params: UpdateTeamParams) -> Result<Option<Team>, AppError> {
        let repo = TeamRepository::new(self.db);

        if let Some(name) = &params.name {
            if let Some(other) = repo.find_by_name(name).await? {
                if other.id != params.id {
                    return Err(AppError::Conflict(format!("Team '{}' already exists", name)));
                }
            }
        }

        Ok(repo.update(params).await?)
    }

    /// Removes a team and its roster.
    ///
    /// # Returns
    /// - `Ok(true)` - Team deleted
    /// - `Ok(false)` - Team does not exist
    /// - `Err(AppError::Conflict)` - Team has matches, or one of its players has recorded
    ///   goals
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        if MatchRepository::new(&txn).count_by_team(id).await? > 0 {
            return Err(AppError::Conflict(format!(
                "Team {} has matches and cannot be deleted",
                id
            )));
        }

        let player_ids = PlayerRepository::new(&txn)
            .get_by_team(id)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();
        if GoalRepository::new(&txn).count_by_players(player_ids).await? > 0 {
            return Err(AppError::Conflict(format!(
                "Players of team {} have recorded goals; the team cannot be deleted",
                id
            )));
        }

        let deleted = TeamRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        Ok(deleted)
    }
}
