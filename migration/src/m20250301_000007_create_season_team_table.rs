use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_team_table::Team, m20250301_000006_create_season_table::Season,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeasonTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(SeasonTeam::Id))
                    .col(integer(SeasonTeam::SeasonId))
                    .col(integer(SeasonTeam::TeamId))
                    .col(
                        timestamp(SeasonTeam::RegisteredAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_season_team_season_id")
                            .from(SeasonTeam::Table, SeasonTeam::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_season_team_team_id")
                            .from(SeasonTeam::Table, SeasonTeam::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_season_team_unique")
                            .col(SeasonTeam::SeasonId)
                            .col(SeasonTeam::TeamId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeasonTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeasonTeam {
    Table,
    Id,
    SeasonId,
    TeamId,
    RegisteredAt,
}
