//! Player type factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a player type with the given name.
///
/// Names are unique; create each type at most once per test database.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Type name, `"foreign"` marks players counted against the quota
///
/// # Returns
/// - `Ok(entity::player_type::Model)` - Created player type
/// - `Err(DbErr)` - Database error during insert
pub async fn create_player_type(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::player_type::Model, DbErr> {
    entity::player_type::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
