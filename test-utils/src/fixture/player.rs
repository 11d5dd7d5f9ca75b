//! Player and player type fixtures.

use entity::{player, player_type};

pub const DEFAULT_NAME: &str = "Test Player";

/// Creates a player model with id `1` on team `1` with player type `1`.
pub fn entity() -> player::Model {
    player::Model {
        id: 1,
        team_id: 1,
        player_type_id: 1,
        name: DEFAULT_NAME.to_string(),
        birth_date: None,
        shirt_number: None,
        note: None,
    }
}

/// Creates a player type model.
pub fn player_type(id: i32, name: &str) -> player_type::Model {
    player_type::Model {
        id,
        name: name.to_string(),
    }
}
