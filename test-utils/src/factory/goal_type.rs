//! Goal type factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a goal type with the given name.
///
/// # Returns
/// - `Ok(entity::goal_type::Model)` - Created goal type
/// - `Err(DbErr)` - Database error during insert
pub async fn create_goal_type(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::goal_type::Model, DbErr> {
    entity::goal_type::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
