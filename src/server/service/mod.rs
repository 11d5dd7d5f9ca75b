//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They load the snapshot a
//! rule needs, run the pure checks from `server::rules`, and perform the write. Every
//! read-check-write sequence runs inside one database transaction so a concurrent
//! writer cannot slip in between the check and the write.

pub mod matches;
pub mod parameters;
pub mod player;
pub mod roster;
pub mod season;
pub mod standings;
pub mod team;

#[cfg(test)]
mod test;
