//! Season registration factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Registers a team for a season without running the season application rules.
///
/// # Returns
/// - `Ok(entity::season_team::Model)` - Created registration
/// - `Err(DbErr)` - Database error during insert
pub async fn create_season_team(
    db: &DatabaseConnection,
    season_id: i32,
    team_id: i32,
) -> Result<entity::season_team::Model, DbErr> {
    entity::season_team::ActiveModel {
        season_id: ActiveValue::Set(season_id),
        team_id: ActiveValue::Set(team_id),
        registered_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
