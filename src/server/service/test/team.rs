use super::*;
use crate::server::{
    model::{
        player::UpdatePlayerParams,
        team::{CreateTeamParams, UpdateTeamParams},
    },
    service::{player::PlayerService, team::TeamService},
};

/// Expected: duplicate team names are a conflict
#[tokio::test]
async fn create_rejects_duplicate_name() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    let service = TeamService::new(db);
    let params = CreateTeamParams {
        name: "Hai Phong".to_string(),
        stadium: Some("Lach Tray".to_string()),
        coach: None,
    };

    service.create(params.clone()).await?;
    let duplicate = service.create(params).await;

    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    Ok(())
}

/// Expected: renaming onto another team's name is a conflict, keeping own name is not
#[tokio::test]
async fn update_checks_name_uniqueness() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    let first = factory::create_team(db).await?;
    let second = factory::create_team(db).await?;
    let service = TeamService::new(db);

    let clash = service
        .update(UpdateTeamParams {
            id: second.id,
            name: Some(first.name.clone()),
            stadium: None,
            coach: None,
        })
        .await;
    assert!(matches!(clash, Err(AppError::Conflict(_))));

    let same = service
        .update(UpdateTeamParams {
            id: first.id,
            name: Some(first.name.clone()),
            stadium: Some("New Ground".to_string()),
            coach: None,
        })
        .await?
        .unwrap();
    assert_eq!(same.stadium, Some("New Ground".to_string()));

    Ok(())
}

/// Expected: team detail includes its roster
#[tokio::test]
async fn get_by_id_includes_players() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    let domestic = factory::create_player_type(db, "domestic").await?;
    let (team, _) = factory::helpers::create_team_with_players(db, domestic.id, 2).await?;
    let service = TeamService::new(db);

    let (found, players) = service.get_by_id(team.id).await?.unwrap();

    assert_eq!(found.id, team.id);
    assert_eq!(players.len(), 2);
    assert!(service.get_by_id(team.id + 100).await?.is_none());

    Ok(())
}

/// Expected: teams with matches are kept; teams without history are deleted with their roster
#[tokio::test]
async fn delete_keeps_teams_with_matches() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    let domestic = factory::create_player_type(db, "domestic").await?;
    let (home, _) = factory::helpers::create_team_with_players(db, domestic.id, 2).await?;
    let away = factory::create_team(db).await?;
    let (idle, idle_players) =
        factory::helpers::create_team_with_players(db, domestic.id, 2).await?;
    factory::create_match(db, home.id, away.id).await?;
    let service = TeamService::new(db);

    assert!(matches!(service.delete(home.id).await, Err(AppError::Conflict(_))));
    assert!(matches!(service.delete(away.id).await, Err(AppError::Conflict(_))));
    assert!(service.get_by_id(home.id).await?.is_some());

    assert!(service.delete(idle.id).await?);
    assert!(service.get_by_id(idle.id).await?.is_none());
    assert!(PlayerService::new(db)
        .get_by_id(idle_players[0].id)
        .await?
        .is_none());

    Ok(())
}

/// Expected: a team whose transferred player scored elsewhere is kept
#[tokio::test]
async fn delete_keeps_team_of_past_scorer() -> Result<(), AppError> {
    let test = league().await;
    let db = db(&test);
    let (domestic, _, normal) = factory::helpers::create_league_defaults(db).await?;
    let (home, players) = factory::helpers::create_team_with_players(db, domestic.id, 1).await?;
    let away = factory::create_team(db).await?;
    let fixture = factory::create_match(db, home.id, away.id).await?;
    factory::create_goal(db, fixture.id, &players[0], normal.id, 60).await?;
    let target = factory::create_team(db).await?;
    PlayerService::new(db)
        .update(UpdatePlayerParams {
            id: players[0].id,
            team_id: Some(target.id),
            ..Default::default()
        })
        .await?;

    let result = TeamService::new(db).delete(target.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
