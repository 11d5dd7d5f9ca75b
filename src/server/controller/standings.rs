use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, standings::StandingRowDto},
    server::{
        error::AppError, rules::standings::StandingRow, service::standings::StandingsService,
        state::AppState,
    },
};

/// Tag for grouping standings endpoints in OpenAPI documentation
pub static STANDINGS_TAG: &str = "standings";

/// Numbers the ordered rows from 1.
pub fn into_table_dto(rows: Vec<StandingRow>) -> Vec<StandingRowDto> {
    rows.into_iter()
        .zip(1..)
        .map(|(row, position)| row.into_dto(position))
        .collect()
}

/// League-wide standings.
///
/// Every team appears, including teams without a played match. Rows are ordered by the
/// configured tie-break criteria; fully tied teams keep their alphabetical order.
///
/// # Returns
/// - `200 OK` - Ordered league table
/// - `500 Internal Server Error` - Parameters missing or database error
#[utoipa::path(
    get,
    path = "/api/standings",
    tag = STANDINGS_TAG,
    responses(
        (status = 200, description = "Ordered league table", body = Vec<StandingRowDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_standings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = StandingsService::new(&state.db).league_table().await?;

    Ok(Json(into_table_dto(rows)))
}
