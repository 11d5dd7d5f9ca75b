use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        season::{CreateSeasonDto, SeasonApplicationDto, SeasonDto, SeasonTeamDto},
        standings::StandingRowDto,
    },
    server::{
        controller::standings::into_table_dto,
        error::AppError,
        model::season::{CreateSeasonParams, Season},
        service::season::SeasonService,
        state::AppState,
    },
};

/// Tag for grouping season endpoints in OpenAPI documentation
pub static SEASON_TAG: &str = "season";

#[utoipa::path(
    post,
    path = "/api/seasons",
    tag = SEASON_TAG,
    request_body = CreateSeasonDto,
    responses(
        (status = 201, description = "Successfully created season", body = SeasonDto),
        (status = 400, description = "Start date after end date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_season(
    State(state): State<AppState>,
    Json(payload): Json<CreateSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db)
        .create(CreateSeasonParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(season.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/seasons",
    tag = SEASON_TAG,
    responses(
        (status = 200, description = "All seasons, most recent first", body = Vec<SeasonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seasons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let seasons = SeasonService::new(&state.db).get_all().await?;

    let dtos: Vec<SeasonDto> = seasons.into_iter().map(Season::into_dto).collect();

    Ok(Json(dtos))
}

/// Register a team for a season.
///
/// The team's current roster must meet the configured minimum number of players.
///
/// # Returns
/// - `201 Created` - Registration stored
/// - `400 Bad Request` - Roster below the minimum size
/// - `404 Not Found` - Season or team does not exist
/// - `409 Conflict` - Team already registered for the season
/// - `500 Internal Server Error` - Parameters missing or database error
#[utoipa::path(
    post,
    path = "/api/seasons/{id}/teams",
    tag = SEASON_TAG,
    params(
        ("id" = i32, Path, description = "Season ID")
    ),
    request_body = SeasonApplicationDto,
    responses(
        (status = 201, description = "Team registered", body = SeasonTeamDto),
        (status = 400, description = "Roster too small", body = ErrorDto),
        (status = 404, description = "Season or team not found", body = ErrorDto),
        (status = 409, description = "Team already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_to_season(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
    Json(payload): Json<SeasonApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let registration = SeasonService::new(&state.db)
        .apply(season_id, payload.team_id)
        .await?;

    Ok((StatusCode::CREATED, Json(registration.into_dto())))
}

/// Standings for one season.
///
/// Covers every registered team plus any team that played a match in the season.
#[utoipa::path(
    get,
    path = "/api/seasons/{id}/standings",
    tag = SEASON_TAG,
    params(
        ("id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Ordered season table", body = Vec<StandingRowDto>),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season_standings(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rows = SeasonService::new(&state.db)
        .standings(season_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Season {} not found", season_id)))?;

    Ok(Json(into_table_dto(rows)))
}
