use super::*;
use crate::server::{
    data::parameters::LeagueParametersRepository,
    error::roster::RosterError,
    model::parameters::UpdateLeagueParametersParams,
    rules::roster::{RosterCandidate, RosterChanges},
    service::roster::RosterService,
};

/// Expected: ConfigurationMissing before any other check when the parameter row is absent
#[tokio::test]
async fn missing_parameters_are_reported_first() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    let team = factory::create_team(db).await?;

    let result = RosterService::new(db)
        .with_today(today())
        .validate_create(&RosterCandidate {
            team_id: team.id,
            player_type_id: 999,
            birth_date: NaiveDate::from_ymd_opt(2020, 1, 1),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::ConfigurationMissing))
    ));

    Ok(())
}

/// Expected: PlayerNotFound takes priority over ConfigurationMissing on update
#[tokio::test]
async fn missing_player_is_reported_before_parameters() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);

    let result = RosterService::new(db)
        .validate_update(42, &RosterChanges::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::PlayerNotFound { player_id: 42 }))
    ));

    Ok(())
}

/// Expected: age boundaries from the stored parameters apply
#[tokio::test]
async fn applies_stored_age_bounds() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    factory::league_parameters::LeagueParametersFactory::new(db)
        .min_age(Some(16))
        .max_age(Some(40))
        .build()
        .await?;
    let domestic = factory::create_player_type(db, "domestic").await?;
    let team = factory::create_team(db).await?;
    let service = RosterService::new(db).with_today(today());
    let candidate = |birth_date| RosterCandidate {
        team_id: team.id,
        player_type_id: domestic.id,
        birth_date,
    };

    let too_old = service
        .validate_create(&candidate(NaiveDate::from_ymd_opt(1984, 1, 1)))
        .await;
    assert!(matches!(
        too_old,
        Err(AppError::RosterErr(RosterError::AgeTooHigh { age: 41, max_age: 40 }))
    ));

    let too_young = service
        .validate_create(&candidate(NaiveDate::from_ymd_opt(2010, 1, 1)))
        .await;
    assert!(matches!(
        too_young,
        Err(AppError::RosterErr(RosterError::AgeTooLow { age: 15, min_age: 16 }))
    ));

    service
        .validate_create(&candidate(NaiveDate::from_ymd_opt(2009, 1, 1)))
        .await?;
    service.validate_create(&candidate(None)).await?;

    Ok(())
}

/// Expected: a full roster in the database rejects newcomers
#[tokio::test]
async fn counts_stored_roster() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    factory::league_parameters::LeagueParametersFactory::new(db)
        .max_players(Some(3))
        .build()
        .await?;
    let domestic = factory::create_player_type(db, "domestic").await?;
    let (full, _) = factory::helpers::create_team_with_players(db, domestic.id, 3).await?;
    let (open, _) = factory::helpers::create_team_with_players(db, domestic.id, 2).await?;
    let service = RosterService::new(db);

    let rejected = service
        .validate_create(&RosterCandidate {
            team_id: full.id,
            player_type_id: domestic.id,
            birth_date: None,
        })
        .await;
    assert!(matches!(
        rejected,
        Err(AppError::RosterErr(RosterError::RosterFull {
            current: 3,
            max_players: 3
        }))
    ));

    service
        .validate_create(&RosterCandidate {
            team_id: open.id,
            player_type_id: domestic.id,
            birth_date: None,
        })
        .await?;

    Ok(())
}

/// Expected: the player's current team never counts the player twice
#[tokio::test]
async fn unchanged_update_passes_on_overfull_roster() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    let (_, foreign, _) = factory::helpers::create_league_defaults(db).await?;
    let (_, players) = factory::helpers::create_team_with_players(db, foreign.id, 4).await?;
    // Tighten the bounds after the roster was built.
    LeagueParametersRepository::new(db)
        .upsert(UpdateLeagueParametersParams {
            min_age: None,
            max_age: None,
            min_players: None,
            max_players: Some(2),
            max_foreign_players: Some(1),
            min_goal_minute: None,
            max_goal_minute: None,
            win_score: 3,
            draw_score: 1,
            lose_score: 0,
            category_sort: Vec::new(),
        })
        .await?;

    let existing = RosterService::new(db)
        .validate_update(
            players[0].id,
            &RosterChanges {
                player_type_id: Some(foreign.id),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(existing.id, players[0].id);

    Ok(())
}

/// Expected: InsufficientRoster below min_players, Ok at the minimum
#[tokio::test]
async fn season_application_checks_minimum() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    factory::league_parameters::LeagueParametersFactory::new(db)
        .min_players(Some(2))
        .build()
        .await?;
    let domestic = factory::create_player_type(db, "domestic").await?;
    let (short, _) = factory::helpers::create_team_with_players(db, domestic.id, 1).await?;
    let (ready, _) = factory::helpers::create_team_with_players(db, domestic.id, 2).await?;
    let service = RosterService::new(db);

    assert!(matches!(
        service.validate_season_application(short.id).await,
        Err(AppError::RosterErr(RosterError::InsufficientRoster {
            current: 1,
            min_players: 2
        }))
    ));
    service.validate_season_application(ready.id).await?;

    Ok(())
}
