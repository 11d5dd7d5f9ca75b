//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating league entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     factory::create_league_parameters(&db).await?;
//!     let domestic = factory::create_player_type(&db, "domestic").await?;
//!     let team = factory::create_team(&db).await?;
//!     let player = factory::create_player(&db, team.id, domestic.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let parameters = factory::league_parameters::LeagueParametersFactory::new(&db)
//!     .max_players(Some(22))
//!     .max_foreign_players(Some(3))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `league_parameters` - The singleton parameter row
//! - `player_type` / `goal_type` - Lookup rows
//! - `team`, `player` - Clubs and rosters
//! - `season`, `season_team` - Seasons and registrations
//! - `matches`, `goal` - Fixtures and goal events
//! - `helpers` - ID generation and multi-entity shortcuts

pub mod goal;
pub mod goal_type;
pub mod helpers;
pub mod league_parameters;
pub mod matches;
pub mod player;
pub mod player_type;
pub mod season;
pub mod season_team;
pub mod team;

pub use goal::create_goal;
pub use goal_type::create_goal_type;
pub use league_parameters::create_league_parameters;
pub use matches::create_match;
pub use player::create_player;
pub use player_type::create_player_type;
pub use season::create_season;
pub use season_team::create_season_team;
pub use team::create_team;
