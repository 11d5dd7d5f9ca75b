//! SeaORM entity models for the league database.

pub mod prelude;

pub mod goal;
pub mod goal_type;
pub mod league_parameters;
pub mod matches;
pub mod player;
pub mod player_type;
pub mod season;
pub mod season_team;
pub mod team;
