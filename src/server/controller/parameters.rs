use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        parameters::{LeagueParametersDto, UpdateLeagueParametersDto},
    },
    server::{
        error::AppError, model::parameters::UpdateLeagueParametersParams,
        service::parameters::LeagueParametersService, state::AppState,
    },
};

/// Tag for grouping league parameter endpoints in OpenAPI documentation
pub static PARAMETERS_TAG: &str = "parameters";

/// Get the league parameters.
///
/// Returns the single configuration row holding age bounds, roster limits, goal minute
/// window, scoring, and tie-break order.
///
/// # Returns
/// - `200 OK` - Current league parameters
/// - `404 Not Found` - Parameters have not been configured
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/parameters",
    tag = PARAMETERS_TAG,
    responses(
        (status = 200, description = "Current league parameters", body = LeagueParametersDto),
        (status = 404, description = "Parameters not configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parameters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let parameters = LeagueParametersService::new(&state.db)
        .get()
        .await?
        .ok_or_else(|| AppError::NotFound("League parameters not configured".to_string()))?;

    Ok(Json(parameters.into_dto()))
}

/// Replace the league parameters.
///
/// The whole row is replaced. Unknown tie-break criterion names, a win score not above
/// the draw score, or inverted bounds are rejected before anything is stored.
///
/// # Returns
/// - `200 OK` - Stored parameters
/// - `400 Bad Request` - Inconsistent scores, bounds or unknown criterion
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/parameters",
    tag = PARAMETERS_TAG,
    request_body = UpdateLeagueParametersDto,
    responses(
        (status = 200, description = "Stored league parameters", body = LeagueParametersDto),
        (status = 400, description = "Invalid parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_parameters(
    State(state): State<AppState>,
    Json(payload): Json<UpdateLeagueParametersDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateLeagueParametersParams::from_dto(payload)?;

    let parameters = LeagueParametersService::new(&state.db)
        .update(params)
        .await?;

    Ok(Json(parameters.into_dto()))
}
