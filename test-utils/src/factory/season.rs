//! Season factory.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test seasons.
///
/// Defaults to a season named `"Season {id}"` running through calendar year 2025.
pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl<'a> SeasonFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Season {}", id),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a season with default values.
pub async fn create_season(db: &DatabaseConnection) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db).build().await
}
