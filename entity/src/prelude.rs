pub use super::goal::Entity as Goal;
pub use super::goal_type::Entity as GoalType;
pub use super::league_parameters::Entity as LeagueParameters;
pub use super::matches::Entity as Matches;
pub use super::player::Entity as Player;
pub use super::player_type::Entity as PlayerType;
pub use super::season::Entity as Season;
pub use super::season_team::Entity as SeasonTeam;
pub use super::team::Entity as Team;
