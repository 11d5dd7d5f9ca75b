use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        player::{CreatePlayerDto, PlayerDto, PlayerTypeDto, UpdatePlayerDto},
    },
    server::{
        error::AppError,
        model::player::{CreatePlayerParams, PlayerType, UpdatePlayerParams},
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Register a player on a team.
///
/// The candidate is checked against the stored league parameters before insert: age
/// bounds, maximum roster size, and the foreign player quota.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Player data including team, type, and optional birth date
///
/// # Returns
/// - `201 Created` - Player stored
/// - `400 Bad Request` - Age, roster size, or foreign quota rule violated
/// - `404 Not Found` - Team or player type does not exist
/// - `500 Internal Server Error` - Parameters missing or database error
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Successfully created player", body = PlayerDto),
        (status = 400, description = "Roster rule violated", body = ErrorDto),
        (status = 404, description = "Team or player type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db)
        .create(CreatePlayerParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player details", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Player {} not found", id)))?;

    Ok(Json(player.into_dto()))
}

/// Partially update a player.
///
/// Only provided fields change. Moving the player to another team re-checks that team's
/// roster size; switching to a foreign type re-checks the foreign quota.
///
/// # Returns
/// - `200 OK` - Updated player
/// - `400 Bad Request` - Roster rule violated
/// - `404 Not Found` - Player, destination team, or player type does not exist
/// - `500 Internal Server Error` - Parameters missing or database error
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Successfully updated player", body = PlayerDto),
        (status = 400, description = "Roster rule violated", body = ErrorDto),
        (status = 404, description = "Player, team or player type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db)
        .update(UpdatePlayerParams::from_dto(id, payload))
        .await?;

    Ok(Json(player.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted player"),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 409, description = "Player has recorded goals", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !PlayerService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(format!("Player {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/player-types",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "All player types", body = Vec<PlayerTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let types = PlayerService::new(&state.db).list_types().await?;

    let dtos: Vec<PlayerTypeDto> = types.into_iter().map(PlayerType::into_dto).collect();

    Ok(Json(dtos))
}
