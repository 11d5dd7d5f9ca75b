use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        matches::{
            CreateGoalDto, CreateMatchDto, GoalDto, GoalTypeDto, MatchDto, MatchResultDto,
            WinnerDto,
        },
        parameters::{LeagueParametersDto, UpdateLeagueParametersDto},
        player::{CreatePlayerDto, PlayerDto, PlayerTypeDto, UpdatePlayerDto},
        season::{CreateSeasonDto, SeasonApplicationDto, SeasonDto, SeasonTeamDto},
        standings::StandingRowDto,
        team::{CreateTeamDto, TeamDto, TeamWithPlayersDto, UpdateTeamDto},
    },
    server::{
        controller::{
            matches::{
                self, create_goal, create_match, delete_goal, delete_match, get_goal_types,
                get_match, get_matches, MATCH_TAG,
            },
            parameters::{self, get_parameters, update_parameters, PARAMETERS_TAG},
            player::{
                self, create_player, delete_player, get_player, get_player_types, update_player,
                PLAYER_TAG,
            },
            season::{
                self, apply_to_season, create_season, get_season_standings, get_seasons,
                SEASON_TAG,
            },
            standings::{self, get_standings, STANDINGS_TAG},
            team::{
                self, create_team, delete_team, get_team, get_team_players, get_teams,
                update_team, TEAM_TAG,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "leaguedesk", description = "League rules and standings API"),
    paths(
        parameters::get_parameters,
        parameters::update_parameters,
        team::create_team,
        team::get_teams,
        team::get_team,
        team::update_team,
        team::delete_team,
        team::get_team_players,
        player::create_player,
        player::get_player,
        player::update_player,
        player::delete_player,
        player::get_player_types,
        matches::create_match,
        matches::get_matches,
        matches::get_match,
        matches::delete_match,
        matches::create_goal,
        matches::delete_goal,
        matches::get_goal_types,
        season::create_season,
        season::get_seasons,
        season::apply_to_season,
        season::get_season_standings,
        standings::get_standings,
    ),
    components(schemas(
        ErrorDto,
        LeagueParametersDto,
        UpdateLeagueParametersDto,
        TeamDto,
        TeamWithPlayersDto,
        CreateTeamDto,
        UpdateTeamDto,
        PlayerDto,
        PlayerTypeDto,
        CreatePlayerDto,
        UpdatePlayerDto,
        MatchDto,
        MatchResultDto,
        WinnerDto,
        GoalDto,
        GoalTypeDto,
        CreateMatchDto,
        CreateGoalDto,
        SeasonDto,
        CreateSeasonDto,
        SeasonApplicationDto,
        SeasonTeamDto,
        StandingRowDto,
    )),
    tags(
        (name = PARAMETERS_TAG, description = "League configuration"),
        (name = TEAM_TAG, description = "Teams and rosters"),
        (name = PLAYER_TAG, description = "Player registration"),
        (name = MATCH_TAG, description = "Matches and goals"),
        (name = SEASON_TAG, description = "Seasons and registrations"),
        (name = STANDINGS_TAG, description = "League table"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/parameters", get(get_parameters).put(update_parameters))
        .route("/api/player-types", get(get_player_types))
        .route("/api/goal-types", get(get_goal_types))
        .route("/api/teams", get(get_teams).post(create_team))
        .route(
            "/api/teams/{id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        .route("/api/teams/{id}/players", get(get_team_players))
        .route("/api/players", post(create_player))
        .route(
            "/api/players/{id}",
            get(get_player).put(update_player).delete(delete_player),
        )
        .route("/api/matches", get(get_matches).post(create_match))
        .route("/api/matches/{id}", get(get_match).delete(delete_match))
        .route("/api/matches/{id}/goals", post(create_goal))
        .route("/api/goals/{id}", delete(delete_goal))
        .route("/api/seasons", get(get_seasons).post(create_season))
        .route("/api/seasons/{id}/teams", post(apply_to_season))
        .route("/api/seasons/{id}/standings", get(get_season_standings))
        .route("/api/standings", get(get_standings))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
