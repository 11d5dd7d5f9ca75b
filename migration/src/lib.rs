pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_league_parameters_table;
mod m20250301_000002_create_player_type_table;
mod m20250301_000003_create_goal_type_table;
mod m20250301_000004_create_team_table;
mod m20250301_000005_create_player_table;
mod m20250301_000006_create_season_table;
mod m20250301_000007_create_season_team_table;
mod m20250301_000008_create_matches_table;
mod m20250301_000009_create_goal_table;
mod m20250302_000010_seed_league_defaults;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_league_parameters_table::Migration),
            Box::new(m20250301_000002_create_player_type_table::Migration),
            Box::new(m20250301_000003_create_goal_type_table::Migration),
            Box::new(m20250301_000004_create_team_table::Migration),
            Box::new(m20250301_000005_create_player_table::Migration),
            Box::new(m20250301_000006_create_season_table::Migration),
            Box::new(m20250301_000007_create_season_team_table::Migration),
            Box::new(m20250301_000008_create_matches_table::Migration),
            Box::new(m20250301_000009_create_goal_table::Migration),
            Box::new(m20250302_000010_seed_league_defaults::Migration),
        ]
    }
}
