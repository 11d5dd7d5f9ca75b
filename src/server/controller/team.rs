use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        player::PlayerDto,
        team::{CreateTeamDto, TeamDto, TeamWithPlayersDto, UpdateTeamDto},
    },
    server::{
        error::AppError,
        model::{
            player::Player,
            team::{CreateTeamParams, Team, UpdateTeamParams},
        },
        service::{player::PlayerService, team::TeamService},
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a new team.
///
/// # Returns
/// - `201 Created` - Created team
/// - `409 Conflict` - A team with the same name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Successfully created team", body = TeamDto),
        (status = 409, description = "Team name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db)
        .create(CreateTeamParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "All teams ordered by name", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).get_all().await?;

    let dtos: Vec<TeamDto> = teams.into_iter().map(Team::into_dto).collect();

    Ok(Json(dtos))
}

/// Get a team together with its roster.
///
/// # Returns
/// - `200 OK` - Team and its players
/// - `404 Not Found` - Team does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team with roster", body = TeamWithPlayersDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (team, players) = TeamService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))?;

    Ok(Json(team.into_dto_with_players(players)))
}

/// Update a team's name, stadium, or coach.
///
/// # Returns
/// - `200 OK` - Updated team
/// - `404 Not Found` - Team does not exist
/// - `409 Conflict` - New name is taken by another team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Successfully updated team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db)
        .update(UpdateTeamParams::from_dto(id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))?;

    Ok(Json(team.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted team"),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team has match history", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !TeamService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(format!("Team {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List a team's roster ordered by shirt number.
#[utoipa::path(
    get,
    path = "/api/teams/{id}/players",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team roster", body = Vec<PlayerDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_players(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db)
        .get_by_team(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))?;

    let dtos: Vec<PlayerDto> = players.into_iter().map(Player::into_dto).collect();

    Ok(Json(dtos))
}
