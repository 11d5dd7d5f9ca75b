use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        matches::{CreateGoalDto, CreateMatchDto, GoalDto, GoalTypeDto, MatchDto, MatchResultDto},
    },
    server::{
        error::AppError,
        model::matches::{CreateGoalParams, CreateMatchParams, GoalType, MatchWithTeams},
        service::matches::MatchService,
        state::AppState,
    },
};

/// Tag for grouping match and goal endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

#[derive(Deserialize, IntoParams)]
pub struct MatchFilterQuery {
    /// Only list matches played in this season
    pub season_id: Option<i32>,
}

/// Schedule a match between two teams.
///
/// # Returns
/// - `201 Created` - Created match with team names
/// - `400 Bad Request` - Both sides are the same team
/// - `404 Not Found` - A team or the season does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Successfully created match", body = MatchDto),
        (status = 400, description = "Team cannot play itself", body = ErrorDto),
        (status = 404, description = "Team or season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    Json(payload): Json<CreateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let fixture = MatchService::new(&state.db)
        .create(CreateMatchParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(fixture.into_dto())))
}

/// List matches ordered by kick-off time, optionally filtered by season.
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    params(MatchFilterQuery),
    responses(
        (status = 200, description = "Matches ordered by kick-off", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches(
    State(state): State<AppState>,
    Query(filter): Query<MatchFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let fixtures = MatchService::new(&state.db).get_all(filter.season_id).await?;

    let dtos: Vec<MatchDto> = fixtures.into_iter().map(MatchWithTeams::into_dto).collect();

    Ok(Json(dtos))
}

/// Get a match with its result.
///
/// The score and winner are derived from the recorded goals on every request; goals are
/// listed in chronological order.
///
/// # Returns
/// - `200 OK` - Match, score, winner, and goal list
/// - `404 Not Found` - Match does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match result", body = MatchResultDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = MatchService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match {} not found", id)))?;

    Ok(Json(detail.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted match and its goals"),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !MatchService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(format!("Match {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Record a goal in a match.
///
/// The scoring team must be one of the match sides, the player must belong to it, and
/// the minute must fall within the configured goal window.
///
/// # Returns
/// - `201 Created` - Stored goal with resolved names
/// - `400 Bad Request` - Goal rule violated
/// - `404 Not Found` - Match, player, or goal type does not exist
/// - `500 Internal Server Error` - Parameters missing or database error
#[utoipa::path(
    post,
    path = "/api/matches/{id}/goals",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    request_body = CreateGoalDto,
    responses(
        (status = 201, description = "Successfully recorded goal", body = GoalDto),
        (status = 400, description = "Goal rule violated", body = ErrorDto),
        (status = 404, description = "Match, player or goal type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_goal(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
    Json(payload): Json<CreateGoalDto>,
) -> Result<impl IntoResponse, AppError> {
    let goal = MatchService::new(&state.db)
        .add_goal(CreateGoalParams::from_dto(match_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(goal.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/goals/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Goal ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted goal"),
        (status = 404, description = "Goal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !MatchService::new(&state.db).delete_goal(id).await? {
        return Err(AppError::NotFound(format!("Goal {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/goal-types",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "All goal types", body = Vec<GoalTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_goal_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let types = MatchService::new(&state.db).list_goal_types().await?;

    let dtos: Vec<GoalTypeDto> = types.into_iter().map(GoalType::into_dto).collect();

    Ok(Json(dtos))
}
