use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{season::SeasonRepository, team::TeamRepository},
    error::AppError,
    model::season::{CreateSeasonParams, Season, SeasonTeam},
    rules::standings::StandingRow,
    service::{roster::RosterService, standings::StandingsService},
};

pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a season; the start date may not be after the end date.
    pub async fn create(&self, params: CreateSeasonParams) -> Result<Season, AppError> {
        if params.start_date > params.end_date {
            return Err(AppError::BadRequest(format!(
                "Season start {} is after its end {}",
                params.start_date, params.end_date
            )));
        }

        Ok(SeasonRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Season>, AppError> {
        Ok(SeasonRepository::new(self.db).get_all().await?)
    }

    /// Registers a team for a season.
    ///
    /// The minimum squad check and the registration insert run in one transaction.
    ///
    /// # Returns
    /// - `Ok(SeasonTeam)` - Registration created
    /// - `Err(AppError::NotFound)` - Season or team does not exist
    /// - `Err(AppError::Conflict)` - Team already registered for the season
    /// - `Err(AppError::RosterErr)` - Roster below the league minimum
    pub async fn apply(&self, season_id: i32, team_id: i32) -> Result<SeasonTeam, AppError> {
        let txn = self.db.begin().await?;
        let seasons = SeasonRepository::new(&txn);

        if seasons.get_by_id(season_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Season {} not found", season_id)));
        }
        if TeamRepository::new(&txn).get_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Team {} not found", team_id)));
        }
        if seasons.is_registered(season_id, team_id).await? {
            return Err(AppError::Conflict(format!(
                "Team {} is already registered for season {}",
                team_id, season_id
            )));
        }

        RosterService::new(&txn)
            .validate_season_application(team_id)
            .await?;

        let registration = seasons.register_team(season_id, team_id).await?;
        txn.commit().await?;

        tracing::info!("Team {} registered for season {}", team_id, season_id);

        Ok(registration)
    }

    /// Gets the season's standings table, `None` if the season does not exist.
    pub async fn standings(&self, season_id: i32) -> Result<Option<Vec<StandingRow>>, AppError> {
        StandingsService::new(self.db).season_table(season_id).await
    }
}
