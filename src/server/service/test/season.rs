use super::*;
use crate::server::{
    error::roster::RosterError, model::season::CreateSeasonParams, service::season::SeasonService,
};

/// Expected: start after end is a bad request
#[tokio::test]
async fn create_rejects_inverted_dates() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);

    let result = SeasonService::new(db)
        .create(CreateSeasonParams {
            name: "2025".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: registration succeeds once, then conflicts
#[tokio::test]
async fn apply_registers_once() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    factory::league_parameters::LeagueParametersFactory::new(db)
        .min_players(Some(1))
        .build()
        .await?;
    let domestic = factory::create_player_type(db, "domestic").await?;
    let (team, _) = factory::helpers::create_team_with_players(db, domestic.id, 1).await?;
    let season = factory::create_season(db).await?;
    let service = SeasonService::new(db);

    let registration = service.apply(season.id, team.id).await?;
    assert_eq!(registration.team_id, team.id);

    let again = service.apply(season.id, team.id).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Expected: short rosters are refused and no registration is stored
#[tokio::test]
async fn apply_enforces_minimum_roster() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    factory::league_parameters::LeagueParametersFactory::new(db)
        .min_players(Some(11))
        .build()
        .await?;
    let domestic = factory::create_player_type(db, "domestic").await?;
    let (team, _) = factory::helpers::create_team_with_players(db, domestic.id, 10).await?;
    let season = factory::create_season(db).await?;
    let service = SeasonService::new(db);

    let result = service.apply(season.id, team.id).await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::InsufficientRoster {
            current: 10,
            min_players: 11
        }))
    ));
    let table = service.standings(season.id).await?.unwrap();
    assert!(table.is_empty());

    Ok(())
}

/// Expected: unknown season or team is NotFound
#[tokio::test]
async fn apply_requires_existing_season_and_team() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    factory::create_league_parameters(db).await?;
    let team = factory::create_team(db).await?;
    let season = factory::create_season(db).await?;
    let service = SeasonService::new(db);

    assert!(matches!(
        service.apply(season.id + 1, team.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.apply(season.id, team.id + 1).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
