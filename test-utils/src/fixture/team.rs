//! Team fixtures.

use entity::team;

pub const DEFAULT_NAME: &str = "Test Team";

/// Creates a team model with id `1` and no stadium or coach.
pub fn entity() -> team::Model {
    team::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        stadium: None,
        coach: None,
    }
}
