use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::error::AppError;

mod player;
mod roster;
mod season;
mod team;

/// Fixed reference date for age calculations.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

async fn league() -> TestContext {
    TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap()
}

fn db(test: &TestContext) -> &DatabaseConnection {
    test.db.as_ref().unwrap()
}
