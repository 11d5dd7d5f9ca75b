//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as default
//! values for factories. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let parameters = fixture::league_parameters::entity();
//! let player = fixture::player::entity();
//! ```

pub mod league_parameters;
pub mod player;
pub mod team;

pub use league_parameters::entity as league_parameters_entity;
pub use player::entity as player_entity;
pub use team::entity as team_entity;
