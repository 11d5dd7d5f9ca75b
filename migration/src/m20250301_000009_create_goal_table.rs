use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000003_create_goal_type_table::GoalType,
    m20250301_000004_create_team_table::Team, m20250301_000005_create_player_table::Player,
    m20250301_000008_create_matches_table::Matches,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Goal::Table)
                    .if_not_exists()
                    .col(pk_auto(Goal::Id))
                    .col(integer(Goal::MatchId))
                    .col(integer(Goal::TeamId))
                    .col(integer(Goal::PlayerId))
                    .col(integer(Goal::GoalTypeId))
                    .col(integer(Goal::Minute))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_match_id")
                            .from(Goal::Table, Goal::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_team_id")
                            .from(Goal::Table, Goal::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_player_id")
                            .from(Goal::Table, Goal::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_goal_type_id")
                            .from(Goal::Table, Goal::GoalTypeId)
                            .to(GoalType::Table, GoalType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_goal_match_id")
                    .table(Goal::Table)
                    .col(Goal::MatchId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Goal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Goal {
    Table,
    Id,
    MatchId,
    TeamId,
    PlayerId,
    GoalTypeId,
    Minute,
}
