use super::*;
use crate::server::{
    error::roster::RosterError,
    model::player::{CreatePlayerParams, UpdatePlayerParams},
    rules::result::Winner,
    service::{matches::MatchService, player::PlayerService, standings::StandingsService},
};

fn new_player(team_id: i32, player_type_id: i32) -> CreatePlayerParams {
    CreatePlayerParams {
        team_id,
        player_type_id,
        name: "Nguyen Van Quyet".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1991, 7, 1),
        shirt_number: Some(10),
        note: None,
    }
}

/// Expected: accepted player is stored, rejected player is not
#[tokio::test]
async fn create_stores_only_eligible_players() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    factory::league_parameters::LeagueParametersFactory::new(db)
        .max_foreign_players(Some(1))
        .build()
        .await?;
    let foreign = factory::create_player_type(db, "foreign").await?;
    let team = factory::create_team(db).await?;
    let service = PlayerService::new(db).with_today(today());

    let first = service.create(new_player(team.id, foreign.id)).await?;
    assert!(first.is_foreign());

    let second = service.create(new_player(team.id, foreign.id)).await;
    assert!(matches!(
        second,
        Err(AppError::RosterErr(RosterError::ForeignQuotaExceeded {
            current: 1,
            max_foreign_players: 1
        }))
    ));

    let roster = service.get_by_team(team.id).await?.unwrap();
    assert_eq!(roster.len(), 1);

    Ok(())
}

/// Expected: NotFound when the team does not exist but the rules pass
#[tokio::test]
async fn create_requires_existing_team() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    let (domestic, _, _) = factory::helpers::create_league_defaults(db).await?;

    let result = PlayerService::new(db)
        .with_today(today())
        .create(new_player(999, domestic.id))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Expected: TypeNotFound for an unknown player type
#[tokio::test]
async fn create_rejects_unknown_type() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    factory::create_league_parameters(db).await?;
    let team = factory::create_team(db).await?;

    let result = PlayerService::new(db).create(new_player(team.id, 77)).await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::TypeNotFound { player_type_id: 77 }))
    ));

    Ok(())
}

/// Expected: transfer into a full team is rejected and the player stays put
#[tokio::test]
async fn update_rejects_transfer_into_full_team() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    factory::league_parameters::LeagueParametersFactory::new(db)
        .max_players(Some(2))
        .build()
        .await?;
    let domestic = factory::create_player_type(db, "domestic").await?;
    let (_, movers) = factory::helpers::create_team_with_players(db, domestic.id, 1).await?;
    let (full, _) = factory::helpers::create_team_with_players(db, domestic.id, 2).await?;
    let service = PlayerService::new(db).with_today(today());

    let result = service
        .update(UpdatePlayerParams {
            id: movers[0].id,
            team_id: Some(full.id),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::RosterFull { .. }))
    ));
    let stored = service.get_by_id(movers[0].id).await?.unwrap();
    assert_eq!(stored.team_id, movers[0].team_id);

    Ok(())
}

/// Expected: non-roster fields can always be edited
#[tokio::test]
async fn update_edits_details() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    factory::league_parameters::LeagueParametersFactory::new(db)
        .max_players(Some(1))
        .build()
        .await?;
    let domestic = factory::create_player_type(db, "domestic").await?;
    let (_, players) = factory::helpers::create_team_with_players(db, domestic.id, 3).await?;

    let updated = PlayerService::new(db)
        .update(UpdatePlayerParams {
            id: players[0].id,
            name: Some("Renamed".to_string()),
            shirt_number: Some(99),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.shirt_number, Some(99));

    Ok(())
}

/// Expected: delete reports whether the player existed
#[tokio::test]
async fn delete_player() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    let domestic = factory::create_player_type(db, "domestic").await?;
    let (team, players) = factory::helpers::create_team_with_players(db, domestic.id, 1).await?;
    let service = PlayerService::new(db);

    assert!(service.delete(players[0].id).await?);
    assert!(!service.delete(players[0].id).await?);
    assert!(service.get_by_team(team.id).await?.unwrap().is_empty());
    assert!(service.get_by_team(team.id + 100).await?.is_none());

    Ok(())
}

/// Expected: a player with recorded goals cannot be deleted and played results stay intact
#[tokio::test]
async fn delete_refuses_player_with_goals() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    let (domestic, _, normal) = factory::helpers::create_league_defaults(db).await?;
    let (home, scorers) = factory::helpers::create_team_with_players(db, domestic.id, 1).await?;
    let away = factory::create_team(db).await?;
    let fixture = factory::create_match(db, home.id, away.id).await?;
    factory::create_goal(db, fixture.id, &scorers[0], normal.id, 12).await?;
    let matches = MatchService::new(db);
    let before = matches.get_by_id(fixture.id).await?.unwrap().result;

    let result = PlayerService::new(db).delete(scorers[0].id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let after = matches.get_by_id(fixture.id).await?.unwrap().result;
    assert_eq!(after, before);
    assert_eq!((after.team1_goals, after.winner), (1, Winner::Team1));
    let table = StandingsService::new(db).league_table().await?;
    let home_row = table.iter().find(|r| r.team_id == home.id).unwrap();
    assert_eq!(home_row.points, 3);
    assert!(PlayerService::new(db).get_by_id(scorers[0].id).await?.is_some());

    Ok(())
}
