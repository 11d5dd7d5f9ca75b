use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections produced when recording matches and goal events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The league parameter row does not exist.
    #[error("League parameters are not configured")]
    ConfigurationMissing,

    /// A match was requested between a team and itself.
    #[error("A match requires two different teams, got team {team_id} twice")]
    SameTeam { team_id: i32 },

    /// One of the referenced teams does not exist.
    #[error("Team {team_id} not found")]
    TeamNotFound { team_id: i32 },

    /// The referenced match does not exist.
    #[error("Match {match_id} not found")]
    MatchNotFound { match_id: i32 },

    /// The scoring team is not one of the two sides of the match.
    #[error("Team {team_id} is not playing in match {match_id}")]
    TeamNotInMatch { team_id: i32, match_id: i32 },

    /// The scoring player does not exist.
    #[error("Player {player_id} not found")]
    PlayerNotFound { player_id: i32 },

    /// The scoring player is not on the scoring team's roster.
    #[error("Player {player_id} does not play for team {team_id}")]
    PlayerNotOnTeam { player_id: i32, team_id: i32 },

    /// The referenced goal type does not exist.
    #[error("Goal type {goal_type_id} not found")]
    GoalTypeNotFound { goal_type_id: i32 },

    /// Goal minute precedes the earliest minute allowed by the league.
    #[error("Goal minute {minute} is before the league minimum of {min_minute}")]
    MinuteTooEarly { minute: i32, min_minute: i32 },

    /// Goal minute exceeds the latest minute allowed by the league.
    #[error("Goal minute {minute} is after the league maximum of {max_minute}")]
    MinuteTooLate { minute: i32, max_minute: i32 },
}

/// Converts match rejections into HTTP responses.
///
/// - `ConfigurationMissing` → 500 Internal Server Error
/// - Missing referenced entities → 404 Not Found
/// - Everything else → 400 Bad Request
impl IntoResponse for MatchError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::ConfigurationMissing => {
                tracing::error!("Match validation failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::TeamNotFound { .. }
            | Self::MatchNotFound { .. }
            | Self::PlayerNotFound { .. }
            | Self::GoalTypeNotFound { .. } => StatusCode::NOT_FOUND,
            _ => {
                tracing::debug!("Match change rejected: {}", self);
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
