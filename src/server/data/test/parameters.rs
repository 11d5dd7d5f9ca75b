use super::*;
use crate::server::{
    data::parameters::LeagueParametersRepository,
    model::parameters::UpdateLeagueParametersParams,
    rules::standings::StandingCriterion,
};

fn params() -> UpdateLeagueParametersParams {
    UpdateLeagueParametersParams {
        min_age: Some(16),
        max_age: Some(40),
        min_players: Some(15),
        max_players: Some(22),
        max_foreign_players: Some(3),
        min_goal_minute: Some(0),
        max_goal_minute: Some(90),
        win_score: 3,
        draw_score: 1,
        lose_score: 0,
        category_sort: vec![StandingCriterion::Points, StandingCriterion::HeadToHead],
    }
}

/// Expected: Ok(None) when the parameter row was never seeded
#[tokio::test]
async fn returns_none_when_unconfigured() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeagueParametersRepository::new(db);

    assert!(repo.get().await?.is_none());

    Ok(())
}

/// Expected: stored row is parsed, including the comma separated criteria
#[tokio::test]
async fn loads_stored_parameters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::league_parameters::LeagueParametersFactory::new(db)
        .max_players(Some(20))
        .category_sort("points,goalsFor,unknown")
        .build()
        .await?;

    let parameters = LeagueParametersRepository::new(db).get().await?.unwrap();

    assert_eq!(parameters.max_players, Some(20));
    assert_eq!(
        parameters.category_sort,
        vec![StandingCriterion::Points, StandingCriterion::GoalsFor]
    );

    Ok(())
}

/// Expected: upsert inserts the singleton row first time, then replaces it
#[tokio::test]
async fn upsert_creates_then_replaces() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = LeagueParametersRepository::new(db);

    let created = repo.upsert(params()).await?;
    assert_eq!(created.min_age, Some(16));

    let replaced = repo
        .upsert(UpdateLeagueParametersParams {
            min_age: None,
            win_score: 2,
            ..params()
        })
        .await?;
    assert_eq!(replaced.min_age, None);
    assert_eq!(replaced.win_score, 2);

    let stored = repo.get().await?.unwrap();
    assert_eq!(stored, replaced);
    assert_eq!(
        stored.category_sort,
        vec![StandingCriterion::Points, StandingCriterion::HeadToHead]
    );

    Ok(())
}
