//! League parameter fixtures.

use entity::league_parameters;

/// Primary key of the singleton parameter row.
pub const DEFAULT_ID: i32 = 1;

/// Default tie-break order as stored in the parameter row.
pub const DEFAULT_CATEGORY_SORT: &str = "points,goal_difference,goals_for";

/// Creates a parameter row with no eligibility bounds.
///
/// # Default Values
/// - id: `1`
/// - all age, roster and goal-minute bounds: `None`
/// - win/draw/lose scores: `3` / `1` / `0`
/// - category_sort: `"points,goal_difference,goals_for"`
pub fn entity() -> league_parameters::Model {
    league_parameters::Model {
        id: DEFAULT_ID,
        min_age: None,
        max_age: None,
        min_players: None,
        max_players: None,
        max_foreign_players: None,
        min_goal_minute: None,
        max_goal_minute: None,
        win_score: 3,
        draw_score: 1,
        lose_score: 0,
        category_sort: DEFAULT_CATEGORY_SORT.to_string(),
    }
}
