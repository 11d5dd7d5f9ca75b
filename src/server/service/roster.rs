//! Roster eligibility checks backed by the database.
//!
//! Loads the snapshot each check needs in a fixed order (existing player, parameters,
//! player type, destination roster) and hands it to `RosterRules`. Pass a transaction
//! as the connection to make the check and the following write atomic.

use chrono::{NaiveDate, Utc};
use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        parameters::LeagueParametersRepository,
        player::{PlayerRepository, PlayerTypeRepository},
    },
    error::{roster::RosterError, AppError},
    model::{parameters::LeagueParameters, player::Player},
    rules::roster::{RosterCandidate, RosterChanges, RosterRules},
};

pub struct RosterService<'a, C: ConnectionTrait> {
    db: &'a C,
    today: NaiveDate,
}

impl<'a, C: ConnectionTrait> RosterService<'a, C> {
    /// Creates a roster service evaluating ages as of the current UTC date.
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            today: Utc::now().date_naive(),
        }
    }

    /// Overrides the date ages are computed against.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Checks whether a new player may join the candidate's team.
    pub async fn validate_create(&self, candidate: &RosterCandidate) -> Result<(), AppError> {
        let parameters = self.load_parameters().await?;
        let player_type = PlayerTypeRepository::new(self.db)
            .get_by_id(candidate.player_type_id)
            .await?;
        let roster = PlayerRepository::new(self.db)
            .get_by_team(candidate.team_id)
            .await?;

        RosterRules::new(&parameters, self.today).validate_create(
            candidate,
            player_type.as_ref(),
            &roster,
        )?;

        Ok(())
    }

    /// Checks whether an existing player may take on the requested changes.
    ///
    /// # Returns
    /// - `Ok(Player)` - The player as currently stored; the change is allowed
    /// - `Err(AppError::RosterErr)` - Player missing or a rule rejected the change
    pub async fn validate_update(
        &self,
        player_id: i32,
        changes: &RosterChanges,
    ) -> Result<Player, AppError> {
        let existing = PlayerRepository::new(self.db)
            .get_by_id(player_id)
            .await?
            .ok_or(RosterError::PlayerNotFound { player_id })?;
        let parameters = self.load_parameters().await?;

        let final_type = match changes.player_type_id {
            Some(player_type_id) => {
                PlayerTypeRepository::new(self.db)
                    .get_by_id(player_type_id)
                    .await?
            }
            None => Some(existing.player_type.clone()),
        };
        let final_team_id = changes.team_id.unwrap_or(existing.team_id);
        let destination_roster = PlayerRepository::new(self.db)
            .get_by_team(final_team_id)
            .await?;

        RosterRules::new(&parameters, self.today).validate_update(
            &existing,
            changes,
            final_type.as_ref(),
            &destination_roster,
        )?;

        Ok(existing)
    }

    /// Checks whether a team has enough players to enter a season.
    pub async fn validate_season_application(&self, team_id: i32) -> Result<(), AppError> {
        let parameters = self.load_parameters().await?;
        let roster = PlayerRepository::new(self.db).get_by_team(team_id).await?;

        RosterRules::new(&parameters, self.today).validate_season_application(roster.len())?;

        Ok(())
    }

    async fn load_parameters(&self) -> Result<LeagueParameters, AppError> {
        LeagueParametersRepository::new(self.db)
            .get()
            .await?
            .ok_or_else(|| RosterError::ConfigurationMissing.into())
    }
}
