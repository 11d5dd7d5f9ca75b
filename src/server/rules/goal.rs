//! Admissibility of matches and goal events.

use crate::server::{
    error::matches::MatchError,
    model::{
        matches::{CreateGoalParams, GoalType, Match},
        parameters::LeagueParameters,
        player::Player,
        team::Team,
    },
};

/// Checks that a match is scheduled between two distinct, existing teams.
///
/// # Arguments
/// - `team1_id` / `team2_id` - Requested sides
/// - `team1` / `team2` - The loaded teams, `None` when the id does not exist
pub fn validate_match_sides(
    team1_id: i32,
    team2_id: i32,
    team1: Option<&Team>,
    team2: Option<&Team>,
) -> Result<(), MatchError> {
    if team1_id == team2_id {
        return Err(MatchError::SameTeam { team_id: team1_id });
    }
    if team1.is_none() {
        return Err(MatchError::TeamNotFound { team_id: team1_id });
    }
    if team2.is_none() {
        return Err(MatchError::TeamNotFound { team_id: team2_id });
    }

    Ok(())
}

/// Goal recording checks evaluated against one parameter snapshot.
pub struct GoalRules<'a> {
    parameters: &'a LeagueParameters,
}

impl<'a> GoalRules<'a> {
    pub fn new(parameters: &'a LeagueParameters) -> Self {
        Self { parameters }
    }

    /// Validates a goal event before it is recorded.
    ///
    /// # Arguments
    /// - `fixture` - Match the goal is recorded against
    /// - `goal` - Requested goal event
    /// - `player` - Scoring player, `None` if it does not exist
    /// - `goal_type` - Goal type, `None` if it does not exist
    ///
    /// # Returns
    /// - `Ok(())` - Goal may be recorded
    /// - `Err(MatchError)` - Scoring side, player, goal type or minute is invalid
    pub fn validate_goal(
        &self,
        fixture: &Match,
        goal: &CreateGoalParams,
        player: Option<&Player>,
        goal_type: Option<&GoalType>,
    ) -> Result<(), MatchError> {
        if !fixture.involves(goal.team_id) {
            return Err(MatchError::TeamNotInMatch {
                team_id: goal.team_id,
                match_id: fixture.id,
            });
        }

        let player = player.ok_or(MatchError::PlayerNotFound {
            player_id: goal.player_id,
        })?;
        if player.team_id != goal.team_id {
            return Err(MatchError::PlayerNotOnTeam {
                player_id: player.id,
                team_id: goal.team_id,
            });
        }

        if goal_type.is_none() {
            return Err(MatchError::GoalTypeNotFound {
                goal_type_id: goal.goal_type_id,
            });
        }

        if let Some(min_minute) = self.parameters.min_goal_minute {
            if goal.minute < min_minute {
                return Err(MatchError::MinuteTooEarly {
                    minute: goal.minute,
                    min_minute,
                });
            }
        }
        if let Some(max_minute) = self.parameters.max_goal_minute {
            if goal.minute > max_minute {
                return Err(MatchError::MinuteTooLate {
                    minute: goal.minute,
                    max_minute,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::server::model::player::PlayerType;

    fn fixture() -> Match {
        Match {
            id: 7,
            season_id: None,
            team1_id: 1,
            team2_id: 2,
            match_time: Utc.with_ymd_and_hms(2025, 3, 1, 15, 0, 0).unwrap(),
            stadium: None,
        }
    }

    fn team(id: i32) -> Team {
        Team {
            id,
            name: format!("Team {}", id),
            stadium: None,
            coach: None,
        }
    }

    fn striker(team_id: i32) -> Player {
        Player {
            id: 11,
            team_id,
            player_type: PlayerType {
                id: 1,
                name: "domestic".to_string(),
            },
            name: "Striker".to_string(),
            birth_date: None,
            shirt_number: Some(9),
            note: None,
        }
    }

    fn normal() -> GoalType {
        GoalType {
            id: 1,
            name: "normal".to_string(),
        }
    }

    fn goal(team_id: i32, minute: i32) -> CreateGoalParams {
        CreateGoalParams {
            match_id: 7,
            team_id,
            player_id: 11,
            goal_type_id: 1,
            minute,
        }
    }

    fn bounded() -> LeagueParameters {
        LeagueParameters {
            min_goal_minute: Some(0),
            max_goal_minute: Some(90),
            ..Default::default()
        }
    }

    #[test]
    fn rejects_match_against_itself() {
        let t = team(1);

        assert_eq!(
            validate_match_sides(1, 1, Some(&t), Some(&t)),
            Err(MatchError::SameTeam { team_id: 1 })
        );
    }

    #[test]
    fn rejects_missing_team() {
        let t = team(1);

        assert_eq!(
            validate_match_sides(1, 5, Some(&t), None),
            Err(MatchError::TeamNotFound { team_id: 5 })
        );
        assert_eq!(validate_match_sides(1, 2, Some(&t), Some(&team(2))), Ok(()));
    }

    #[test]
    fn accepts_valid_goal() {
        let parameters = bounded();
        let rules = GoalRules::new(&parameters);

        let result = rules.validate_goal(
            &fixture(),
            &goal(2, 45),
            Some(&striker(2)),
            Some(&normal()),
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn rejects_team_not_in_match() {
        let parameters = bounded();
        let rules = GoalRules::new(&parameters);

        let result = rules.validate_goal(
            &fixture(),
            &goal(3, 45),
            Some(&striker(3)),
            Some(&normal()),
        );
        assert_eq!(
            result,
            Err(MatchError::TeamNotInMatch {
                team_id: 3,
                match_id: 7
            })
        );
    }

    #[test]
    fn rejects_player_from_other_team() {
        let parameters = bounded();
        let rules = GoalRules::new(&parameters);

        let result = rules.validate_goal(
            &fixture(),
            &goal(1, 45),
            Some(&striker(2)),
            Some(&normal()),
        );
        assert_eq!(
            result,
            Err(MatchError::PlayerNotOnTeam {
                player_id: 11,
                team_id: 1
            })
        );

        let result = rules.validate_goal(&fixture(), &goal(1, 45), None, Some(&normal()));
        assert_eq!(result, Err(MatchError::PlayerNotFound { player_id: 11 }));
    }

    #[test]
    fn rejects_missing_goal_type() {
        let parameters = bounded();
        let rules = GoalRules::new(&parameters);

        let result = rules.validate_goal(&fixture(), &goal(1, 45), Some(&striker(1)), None);
        assert_eq!(result, Err(MatchError::GoalTypeNotFound { goal_type_id: 1 }));
    }

    #[test]
    fn enforces_minute_bounds_inclusively() {
        let parameters = bounded();
        let rules = GoalRules::new(&parameters);
        let p = striker(1);
        let t = normal();

        assert_eq!(rules.validate_goal(&fixture(), &goal(1, 0), Some(&p), Some(&t)), Ok(()));
        assert_eq!(rules.validate_goal(&fixture(), &goal(1, 90), Some(&p), Some(&t)), Ok(()));
        assert_eq!(
            rules.validate_goal(&fixture(), &goal(1, -1), Some(&p), Some(&t)),
            Err(MatchError::MinuteTooEarly {
                minute: -1,
                min_minute: 0
            })
        );
        assert_eq!(
            rules.validate_goal(&fixture(), &goal(1, 91), Some(&p), Some(&t)),
            Err(MatchError::MinuteTooLate {
                minute: 91,
                max_minute: 90
            })
        );
    }

    #[test]
    fn unbounded_minutes_accept_stoppage_time() {
        let parameters = LeagueParameters::default();
        let rules = GoalRules::new(&parameters);

        let result = rules.validate_goal(
            &fixture(),
            &goal(1, 120),
            Some(&striker(1)),
            Some(&normal()),
        );
        assert_eq!(result, Ok(()));
    }
}
