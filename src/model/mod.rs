//! Data transfer objects exchanged with the dashboards over the REST API.
//!
//! These types define the JSON wire shapes only. Server-side domain models live in
//! `crate::server::model` and convert to and from these DTOs at the controller boundary.

pub mod api;
pub mod matches;
pub mod parameters;
pub mod player;
pub mod season;
pub mod standings;
pub mod team;
