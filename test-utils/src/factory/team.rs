//! Team factory for creating test team entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db)
///     .name("Hanoi FC")
///     .stadium(Some("Hang Day".to_string()))
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    stadium: Option<String>,
    coach: Option<String>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"` where id is auto-incremented
    /// - stadium: `None`
    /// - coach: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            stadium: None,
            coach: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn stadium(mut self, stadium: Option<String>) -> Self {
        self.stadium = stadium;
        self
    }

    pub fn coach(mut self, coach: Option<String>) -> Self {
        self.coach = coach;
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            stadium: ActiveValue::Set(self.stadium),
            coach: ActiveValue::Set(self.coach),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values.
///
/// Shorthand for `TeamFactory::new(db).build().await`.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_teams_with_unique_names() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Team).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_team(db).await?;
        let second = create_team(db).await?;

        assert_ne!(first.name, second.name);
        assert_ne!(first.id, second.id);

        Ok(())
    }
}
