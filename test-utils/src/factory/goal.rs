//! Goal factory for recording goal events in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating goal events.
///
/// Skips the goal admissibility rules, which lets tests record goals for teams
/// outside the match.
pub struct GoalFactory<'a> {
    db: &'a DatabaseConnection,
    match_id: i32,
    team_id: i32,
    player_id: i32,
    goal_type_id: i32,
    minute: i32,
}

impl<'a> GoalFactory<'a> {
    /// Creates a new GoalFactory scored in minute 1.
    pub fn new(
        db: &'a DatabaseConnection,
        match_id: i32,
        team_id: i32,
        player_id: i32,
        goal_type_id: i32,
    ) -> Self {
        Self {
            db,
            match_id,
            team_id,
            player_id,
            goal_type_id,
            minute: 1,
        }
    }

    pub fn minute(mut self, minute: i32) -> Self {
        self.minute = minute;
        self
    }

    pub async fn build(self) -> Result<entity::goal::Model, DbErr> {
        entity::goal::ActiveModel {
            match_id: ActiveValue::Set(self.match_id),
            team_id: ActiveValue::Set(self.team_id),
            player_id: ActiveValue::Set(self.player_id),
            goal_type_id: ActiveValue::Set(self.goal_type_id),
            minute: ActiveValue::Set(self.minute),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Records a goal for `player` in the given minute.
///
/// The goal is credited to the player's current team.
pub async fn create_goal(
    db: &DatabaseConnection,
    match_id: i32,
    player: &entity::player::Model,
    goal_type_id: i32,
    minute: i32,
) -> Result<entity::goal::Model, DbErr> {
    GoalFactory::new(db, match_id, player.team_id, player.id, goal_type_id)
        .minute(minute)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::TestBuilder,
        factory::{
            goal_type::create_goal_type, helpers::create_team_with_players,
            matches::create_match, player_type::create_player_type,
        },
    };
    use entity::prelude::*;
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

    #[tokio::test]
    async fn records_goals_for_match() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_league_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let domestic = create_player_type(db, "domestic").await?;
        let normal = create_goal_type(db, "normal").await?;
        let (home, home_players) = create_team_with_players(db, domestic.id, 1).await?;
        let (away, _) = create_team_with_players(db, domestic.id, 1).await?;
        let fixture = create_match(db, home.id, away.id).await?;

        create_goal(db, fixture.id, &home_players[0], normal.id, 12).await?;
        create_goal(db, fixture.id, &home_players[0], normal.id, 80).await?;

        let goals = Goal::find()
            .filter(entity::goal::Column::MatchId.eq(fixture.id))
            .all(db)
            .await?;
        assert_eq!(goals.len(), 2);
        assert!(goals.iter().all(|g| g.team_id == home.id));

        Ok(())
    }
}
