//! HTTP request handlers, one module per resource.
//!
//! Controllers convert DTOs into server-side parameter types, call the matching service,
//! and convert the returned domain models back into DTOs. A service returning `None` for
//! a lookup is mapped to `404 Not Found` here.

pub mod matches;
pub mod parameters;
pub mod player;
pub mod season;
pub mod standings;
pub mod team;
