//! Player factory for creating test player entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db, team.id, foreign.id)
///     .birth_date(NaiveDate::from_ymd_opt(1995, 4, 2))
///     .shirt_number(Some(10))
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    player_type_id: i32,
    name: String,
    birth_date: Option<NaiveDate>,
    shirt_number: Option<i32>,
    note: Option<String>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Player {id}"` where id is auto-incremented
    /// - birth_date, shirt_number, note: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `team_id` - Team the player is rostered on
    /// - `player_type_id` - Player type of the player
    pub fn new(db: &'a DatabaseConnection, team_id: i32, player_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            player_type_id,
            name: format!("Player {}", id),
            birth_date: None,
            shirt_number: None,
            note: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn birth_date(mut self, birth_date: Option<NaiveDate>) -> Self {
        self.birth_date = birth_date;
        self
    }

    pub fn shirt_number(mut self, shirt_number: Option<i32>) -> Self {
        self.shirt_number = shirt_number;
        self
    }

    pub fn note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// The factory bypasses roster eligibility rules, so tests can set up rosters
    /// that exceed the configured bounds.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            team_id: ActiveValue::Set(self.team_id),
            player_type_id: ActiveValue::Set(self.player_type_id),
            name: ActiveValue::Set(self.name),
            birth_date: ActiveValue::Set(self.birth_date),
            shirt_number: ActiveValue::Set(self.shirt_number),
            note: ActiveValue::Set(self.note),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values on the given team.
///
/// Shorthand for `PlayerFactory::new(db, team_id, player_type_id).build().await`.
pub async fn create_player(
    db: &DatabaseConnection,
    team_id: i32,
    player_type_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, team_id, player_type_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::TestBuilder,
        factory::{player_type::create_player_type, team::create_team},
    };

    #[tokio::test]
    async fn creates_player_on_team() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let team = create_team(db).await?;
        let domestic = create_player_type(db, "domestic").await?;

        let player = PlayerFactory::new(db, team.id, domestic.id)
            .birth_date(NaiveDate::from_ymd_opt(2001, 5, 20))
            .build()
            .await?;

        assert_eq!(player.team_id, team.id);
        assert_eq!(player.player_type_id, domestic.id);
        assert_eq!(player.birth_date, NaiveDate::from_ymd_opt(2001, 5, 20));

        Ok(())
    }
}
