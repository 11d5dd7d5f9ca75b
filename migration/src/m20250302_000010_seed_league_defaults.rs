use sea_orm_migration::prelude::*;

use super::{
    m20250301_000001_create_league_parameters_table::LeagueParameters,
    m20250301_000002_create_player_type_table::PlayerType,
    m20250301_000003_create_goal_type_table::GoalType,
};

const PLAYER_TYPES: [&str; 2] = ["domestic", "foreign"];
const GOAL_TYPES: [&str; 3] = ["normal", "penalty", "own_goal"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(LeagueParameters::Table)
                    .columns([
                        LeagueParameters::Id,
                        LeagueParameters::WinScore,
                        LeagueParameters::DrawScore,
                        LeagueParameters::LoseScore,
                        LeagueParameters::CategorySort,
                    ])
                    .values_panic([
                        1.into(),
                        3.into(),
                        1.into(),
                        0.into(),
                        "points,goal_difference,goals_for".into(),
                    ])
                    .to_owned(),
            )
            .await?;

        for name in PLAYER_TYPES {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(PlayerType::Table)
                        .columns([PlayerType::Name])
                        .values_panic([name.into()])
                        .to_owned(),
                )
                .await?;
        }

        for name in GOAL_TYPES {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(GoalType::Table)
                        .columns([GoalType::Name])
                        .values_panic([name.into()])
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(GoalType::Table)
                    .and_where(Expr::col(GoalType::Name).is_in(GOAL_TYPES))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(PlayerType::Table)
                    .and_where(Expr::col(PlayerType::Name).is_in(PLAYER_TYPES))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(LeagueParameters::Table)
                    .and_where(Expr::col(LeagueParameters::Id).eq(1))
                    .to_owned(),
            )
            .await
    }
}
