//! League rules.
//!
//! Pure, synchronous checks and calculators. Every function takes the league
//! parameters and the data snapshot it needs as explicit arguments and performs no
//! I/O, so the service layer decides what is loaded and inside which transaction.

pub mod goal;
pub mod result;
pub mod roster;
pub mod standings;
