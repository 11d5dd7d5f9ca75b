use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_player_type_table::PlayerType,
    m20250301_000004_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer(Player::TeamId))
                    .col(integer(Player::PlayerTypeId))
                    .col(string(Player::Name))
                    .col(date_null(Player::BirthDate))
                    .col(integer_null(Player::ShirtNumber))
                    .col(text_null(Player::Note))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_team_id")
                            .from(Player::Table, Player::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_player_type_id")
                            .from(Player::Table, Player::PlayerTypeId)
                            .to(PlayerType::Table, PlayerType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_team_id")
                    .table(Player::Table)
                    .col(Player::TeamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    TeamId,
    PlayerTypeId,
    Name,
    BirthDate,
    ShirtNumber,
    Note,
}
