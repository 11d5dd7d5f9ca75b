//! Match factory for creating test fixtures between two teams.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = MatchFactory::new(&db, home.id, away.id)
///     .season_id(Some(season.id))
///     .build()
///     .await?;
/// ```
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: Option<i32>,
    team1_id: i32,
    team2_id: i32,
    match_time: DateTime<Utc>,
    stadium: Option<String>,
}

impl<'a> MatchFactory<'a> {
    /// Creates a new MatchFactory with default values.
    ///
    /// Defaults:
    /// - season_id: `None`
    /// - match_time: 1 day from now
    /// - stadium: `None`
    pub fn new(db: &'a DatabaseConnection, team1_id: i32, team2_id: i32) -> Self {
        Self {
            db,
            season_id: None,
            team1_id,
            team2_id,
            match_time: Utc::now() + Duration::days(1),
            stadium: None,
        }
    }

    pub fn season_id(mut self, season_id: Option<i32>) -> Self {
        self.season_id = season_id;
        self
    }

    pub fn match_time(mut self, match_time: DateTime<Utc>) -> Self {
        self.match_time = match_time;
        self
    }

    pub fn stadium(mut self, stadium: Option<String>) -> Self {
        self.stadium = stadium;
        self
    }

    /// Builds and inserts the match entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::matches::Model)` - Created match entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::matches::Model, DbErr> {
        entity::matches::ActiveModel {
            season_id: ActiveValue::Set(self.season_id),
            team1_id: ActiveValue::Set(self.team1_id),
            team2_id: ActiveValue::Set(self.team2_id),
            match_time: ActiveValue::Set(self.match_time),
            stadium: ActiveValue::Set(self.stadium),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a match between two teams with default values.
pub async fn create_match(
    db: &DatabaseConnection,
    team1_id: i32,
    team2_id: i32,
) -> Result<entity::matches::Model, DbErr> {
    MatchFactory::new(db, team1_id, team2_id).build().await
}
