//! League parameter factory for creating the singleton parameter row.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture;

/// Factory for the league parameter row.
///
/// Starts from `fixture::league_parameters::entity()`, an unbounded league scoring
/// 3/1/0, and lets tests tighten individual bounds.
///
/// # Example
///
/// ```rust,ignore
/// let parameters = LeagueParametersFactory::new(&db)
///     .min_age(Some(16))
///     .max_age(Some(40))
///     .build()
///     .await?;
/// ```
pub struct LeagueParametersFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::league_parameters::Model,
}

impl<'a> LeagueParametersFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            model: fixture::league_parameters::entity(),
        }
    }

    pub fn min_age(mut self, min_age: Option<i32>) -> Self {
        self.model.min_age = min_age;
        self
    }

    pub fn max_age(mut self, max_age: Option<i32>) -> Self {
        self.model.max_age = max_age;
        self
    }

    pub fn min_players(mut self, min_players: Option<i32>) -> Self {
        self.model.min_players = min_players;
        self
    }

    pub fn max_players(mut self, max_players: Option<i32>) -> Self {
        self.model.max_players = max_players;
        self
    }

    pub fn max_foreign_players(mut self, max_foreign_players: Option<i32>) -> Self {
        self.model.max_foreign_players = max_foreign_players;
        self
    }

    pub fn goal_minutes(
        mut self,
        min_goal_minute: Option<i32>,
        max_goal_minute: Option<i32>,
    ) -> Self {
        self.model.min_goal_minute = min_goal_minute;
        self.model.max_goal_minute = max_goal_minute;
        self
    }

    /// Sets the points awarded for a win, draw and loss.
    pub fn scores(mut self, win: i32, draw: i32, lose: i32) -> Self {
        self.model.win_score = win;
        self.model.draw_score = draw;
        self.model.lose_score = lose;
        self
    }

    /// Sets the comma separated tie-break order.
    pub fn category_sort(mut self, category_sort: impl Into<String>) -> Self {
        self.model.category_sort = category_sort.into();
        self
    }

    /// Builds and inserts the parameter row.
    ///
    /// # Returns
    /// - `Ok(entity::league_parameters::Model)` - Created parameter row
    /// - `Err(DbErr)` - Database error during insert, including a second insert
    pub async fn build(self) -> Result<entity::league_parameters::Model, DbErr> {
        let m = self.model;
        entity::league_parameters::ActiveModel {
            id: ActiveValue::Set(m.id),
            min_age: ActiveValue::Set(m.min_age),
            max_age: ActiveValue::Set(m.max_age),
            min_players: ActiveValue::Set(m.min_players),
            max_players: ActiveValue::Set(m.max_players),
            max_foreign_players: ActiveValue::Set(m.max_foreign_players),
            min_goal_minute: ActiveValue::Set(m.min_goal_minute),
            max_goal_minute: ActiveValue::Set(m.max_goal_minute),
            win_score: ActiveValue::Set(m.win_score),
            draw_score: ActiveValue::Set(m.draw_score),
            lose_score: ActiveValue::Set(m.lose_score),
            category_sort: ActiveValue::Set(m.category_sort),
        }
        .insert(self.db)
        .await
    }
}

/// Creates the parameter row with default values.
///
/// Shorthand for `LeagueParametersFactory::new(db).build().await`.
pub async fn create_league_parameters(
    db: &DatabaseConnection,
) -> Result<entity::league_parameters::Model, DbErr> {
    LeagueParametersFactory::new(db).build().await
}
