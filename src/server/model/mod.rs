//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types (`Create*Params`,
//! `Update*Params`) carry validated operation inputs from controllers to services.

pub mod matches;
pub mod parameters;
pub mod player;
pub mod season;
pub mod team;
