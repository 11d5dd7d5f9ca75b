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
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(pk_auto(Matches::Id))
                    .col(integer_null(Matches::SeasonId))
                    .col(integer(Matches::Team1Id))
                    .col(integer(Matches::Team2Id))
                    .col(timestamp(Matches::MatchTime))
                    .col(string_null(Matches::Stadium))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_season_id")
                            .from(Matches::Table, Matches::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_team1_id")
                            .from(Matches::Table, Matches::Team1Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_team2_id")
                            .from(Matches::Table, Matches::Team2Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Matches {
    Table,
    Id,
    SeasonId,
    Team1Id,
    Team2Id,
    MatchTime,
    Stadium,
}
