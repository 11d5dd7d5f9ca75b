use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        matches::GoalRepository,
        player::{PlayerRepository, PlayerTypeRepository},
        team::TeamRepository,
    },
    error::AppError,
    model::player::{CreatePlayerParams, Player, PlayerType, UpdatePlayerParams},
    rules::roster::{RosterCandidate, RosterChanges},
    service::roster::RosterService,
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
    today: NaiveDate,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            today: Utc::now().date_naive(),
        }
    }

    /// Overrides the date player ages are computed against.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Registers a new player after the roster eligibility checks pass.
    ///
    /// The eligibility check and the insert run in one transaction.
    ///
    /// # Returns
    /// - `Ok(Player)` - Created player
    /// - `Err(AppError::RosterErr)` - An eligibility rule rejected the player
    /// - `Err(AppError::NotFound)` - The team does not exist
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, AppError> {
        let txn = self.db.begin().await?;

        let candidate = RosterCandidate {
            team_id: params.team_id,
            player_type_id: params.player_type_id,
            birth_date: params.birth_date,
        };
        RosterService::new(&txn)
            .with_today(self.today)
            .validate_create(&candidate)
            .await?;

        if TeamRepository::new(&txn)
            .get_by_id(params.team_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Team {} not found",
                params.team_id
            )));
        }

        let player = PlayerRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!("Registered player {} on team {}", player.id, player.team_id);

        Ok(player)
    }

    /// Updates a player after the roster eligibility checks pass.
    ///
    /// The eligibility check and the update run in one transaction.
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Player, AppError> {
        let txn = self.db.begin().await?;

        let changes = RosterChanges {
            team_id: params.team_id,
            player_type_id: params.player_type_id,
            birth_date: params.birth_date,
        };
        let existing = RosterService::new(&txn)
            .with_today(self.today)
            .validate_update(params.id, &changes)
            .await?;

        if let Some(team_id) = params.team_id.filter(|id| *id != existing.team_id) {
            if TeamRepository::new(&txn).get_by_id(team_id).await?.is_none() {
                return Err(AppError::NotFound(format!("Team {} not found", team_id)));
            }
        }

        let id = params.id;
        let player = PlayerRepository::new(&txn)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", id)))?;
        txn.commit().await?;

        if player.team_id != existing.team_id {
            tracing::info!(
                "Moved player {} from team {} to team {}",
                player.id,
                existing.team_id,
                player.team_id
            );
        }

        Ok(player)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Player>, AppError> {
        Ok(PlayerRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets a team's roster, `None` if the team does not exist.
    pub async fn get_by_team(&self, team_id: i32) -> Result<Option<Vec<Player>>, AppError> {
        if TeamRepository::new(self.db)
            .get_by_id(team_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        Ok(Some(PlayerRepository::new(self.db).get_by_team(team_id).await?))
    }

    /// Removes a player; the minimum squad size is not re-checked.
    ///
    /// # Returns
    /// - `Ok(true)` - Player deleted
    /// - `Ok(false)` - Player does not exist
    /// - `Err(AppError::Conflict)` - Player has recorded goals, which played results depend on
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let goals = GoalRepository::new(&txn).count_by_players(vec![id]).await?;
        if goals > 0 {
            return Err(AppError::Conflict(format!(
                "Player {} has {} recorded goal(s) and cannot be deleted",
                id, goals
            )));
        }

        let deleted = PlayerRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        Ok(deleted)
    }

    pub async fn list_types(&self) -> Result<Vec<PlayerType>, AppError> {
        Ok(PlayerTypeRepository::new(self.db).get_all().await?)
    }
}
