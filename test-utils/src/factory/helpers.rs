//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team with `count` players of the given type.
///
/// # Arguments
/// - `db` - Database connection
/// - `player_type_id` - Type assigned to every created player
/// - `count` - Number of players to create
///
/// # Returns
/// - `Ok((team, players))` - The created team and its players
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_players(
    db: &DatabaseConnection,
    player_type_id: i32,
    count: usize,
) -> Result<(entity::team::Model, Vec<entity::player::Model>), DbErr> {
    let team = crate::factory::team::create_team(db).await?;

    let mut players = Vec::with_capacity(count);
    for _ in 0..count {
        players.push(crate::factory::player::create_player(db, team.id, player_type_id).await?);
    }

    Ok((team, players))
}

/// Creates the default lookup rows used by most league tests.
///
/// Inserts the parameter row with unbounded defaults, the `domestic` and `foreign`
/// player types and the `normal` goal type.
///
/// # Returns
/// - `Ok((domestic, foreign, normal))` - The created lookup rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_league_defaults(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::player_type::Model,
        entity::player_type::Model,
        entity::goal_type::Model,
    ),
    DbErr,
> {
    crate::factory::league_parameters::create_league_parameters(db).await?;
    let domestic = crate::factory::player_type::create_player_type(db, "domestic").await?;
    let foreign = crate::factory::player_type::create_player_type(db, "foreign").await?;
    let normal = crate::factory::goal_type::create_goal_type(db, "normal").await?;

    Ok((domestic, foreign, normal))
}
