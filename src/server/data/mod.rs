//! Database repository layer for all league entities.
//!
//! Repositories handle the CRUD queries for each domain. They use SeaORM entity models
//! internally and return domain models, keeping the data layer separate from business
//! logic. Every repository is generic over `ConnectionTrait`, so the same code runs
//! against the connection pool or inside a transaction opened by a service.

pub mod matches;
pub mod parameters;
pub mod player;
pub mod season;
pub mod team;

#[cfg(test)]
mod test;
