use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections produced by the roster eligibility checks.
///
/// Every variant carries the observed value and the configured bound so the
/// caller can render a human readable explanation without re-reading the
/// league parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The league parameter row does not exist.
    ///
    /// This is a deployment problem rather than a user error and results in a
    /// 500 Internal Server Error.
    #[error("League parameters are not configured")]
    ConfigurationMissing,

    /// The player being updated does not exist.
    #[error("Player {player_id} not found")]
    PlayerNotFound { player_id: i32 },

    /// The requested player type does not exist.
    #[error("Player type {player_type_id} not found")]
    TypeNotFound { player_type_id: i32 },

    /// Player is younger than the league minimum age.
    #[error("Player is {age} years old but the league minimum age is {min_age}")]
    AgeTooLow { age: i32, min_age: i32 },

    /// Player is older than the league maximum age.
    #[error("Player is {age} years old but the league maximum age is {max_age}")]
    AgeTooHigh { age: i32, max_age: i32 },

    /// The destination roster is already at the league maximum squad size.
    #[error("Team already has {current} players, the league maximum is {max_players}")]
    RosterFull { current: usize, max_players: i32 },

    /// The destination roster already holds the maximum number of foreign players.
    #[error(
        "Team already has {current} foreign players, the league maximum is {max_foreign_players}"
    )]
    ForeignQuotaExceeded {
        current: usize,
        max_foreign_players: i32,
    },

    /// The team has fewer players than required to enter a season.
    #[error("Team has {current} players but at least {min_players} are required")]
    InsufficientRoster { current: usize, min_players: i32 },
}

/// Converts roster rejections into HTTP responses.
///
/// - `ConfigurationMissing` → 500 Internal Server Error, logged at error level
/// - `PlayerNotFound` / `TypeNotFound` → 404 Not Found
/// - All other rejections → 400 Bad Request with the rejection message
impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::ConfigurationMissing => {
                tracing::error!("Roster validation failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::PlayerNotFound { .. } | Self::TypeNotFound { .. } => StatusCode::NOT_FOUND,
            _ => {
                tracing::debug!("Roster change rejected: {}", self);
                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
