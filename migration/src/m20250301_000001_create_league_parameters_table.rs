use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeagueParameters::Table)
                    .if_not_exists()
                    .col(integer(LeagueParameters::Id).primary_key())
                    .col(integer_null(LeagueParameters::MinAge))
                    .col(integer_null(LeagueParameters::MaxAge))
                    .col(integer_null(LeagueParameters::MinPlayers))
                    .col(integer_null(LeagueParameters::MaxPlayers))
                    .col(integer_null(LeagueParameters::MaxForeignPlayers))
                    .col(integer_null(LeagueParameters::MinGoalMinute))
                    .col(integer_null(LeagueParameters::MaxGoalMinute))
                    .col(integer(LeagueParameters::WinScore))
                    .col(integer(LeagueParameters::DrawScore))
                    .col(integer(LeagueParameters::LoseScore))
                    .col(string(LeagueParameters::CategorySort))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeagueParameters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeagueParameters {
    Table,
    Id,
    MinAge,
    MaxAge,
    MinPlayers,
    MaxPlayers,
    MaxForeignPlayers,
    MinGoalMinute,
    MaxGoalMinute,
    WinScore,
    DrawScore,
    LoseScore,
    CategorySort,
}
