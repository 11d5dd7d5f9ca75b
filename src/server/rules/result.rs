//! Match result derivation.
//!
//! Scores are never stored; they are recomputed from the recorded goal events each
//! time a match is read.

use std::cmp::Ordering;

use crate::server::model::matches::{GoalDetail, Match};

/// Outcome of a match from the point of view of its two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Team1,
    Team2,
    Draw,
}

impl Winner {
    pub fn from_scores(team1_goals: u32, team2_goals: u32) -> Self {
        match team1_goals.cmp(&team2_goals) {
            Ordering::Greater => Self::Team1,
            Ordering::Less => Self::Team2,
            Ordering::Equal => Self::Draw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub team1_goals: u32,
    pub team2_goals: u32,
    pub winner: Winner,
    /// Goal events ordered by minute, then by goal id.
    pub goals: Vec<GoalDetail>,
}

/// Derives the score and winner of a match from its goal events.
///
/// Goals credited to a team that is not one of the two sides are kept in the goal
/// list but counted for neither side. The result does not depend on the order of
/// `goals`.
pub fn compute_match_result(fixture: &Match, mut goals: Vec<GoalDetail>) -> MatchResult {
    goals.sort_by_key(|g| (g.goal.minute, g.goal.id));

    let team1_goals = goals
        .iter()
        .filter(|g| g.goal.team_id == fixture.team1_id)
        .count() as u32;
    let team2_goals = goals
        .iter()
        .filter(|g| g.goal.team_id == fixture.team2_id)
        .count() as u32;

    MatchResult {
        team1_goals,
        team2_goals,
        winner: Winner::from_scores(team1_goals, team2_goals),
        goals,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::server::model::matches::Goal;

    fn fixture() -> Match {
        Match {
            id: 1,
            season_id: None,
            team1_id: 1,
            team2_id: 2,
            match_time: Utc.with_ymd_and_hms(2025, 3, 1, 15, 0, 0).unwrap(),
            stadium: None,
        }
    }

    fn goal(id: i32, team_id: i32, minute: i32) -> GoalDetail {
        GoalDetail {
            goal: Goal {
                id,
                match_id: 1,
                team_id,
                player_id: 10 + team_id,
                goal_type_id: 1,
                minute,
            },
            team_name: format!("Team {}", team_id),
            player_name: format!("Player {}", 10 + team_id),
            goal_type_name: "normal".to_string(),
        }
    }

    #[test]
    fn counts_goals_per_side() {
        let result = compute_match_result(
            &fixture(),
            vec![goal(1, 1, 10), goal(2, 1, 30), goal(3, 2, 80)],
        );

        assert_eq!(result.team1_goals, 2);
        assert_eq!(result.team2_goals, 1);
        assert_eq!(result.winner, Winner::Team1);
    }

    #[test]
    fn no_goals_is_a_draw() {
        let result = compute_match_result(&fixture(), Vec::new());

        assert_eq!(result.team1_goals, 0);
        assert_eq!(result.team2_goals, 0);
        assert_eq!(result.winner, Winner::Draw);
        assert!(result.goals.is_empty());
    }

    #[test]
    fn away_win() {
        let result = compute_match_result(&fixture(), vec![goal(1, 2, 5)]);

        assert_eq!(result.winner, Winner::Team2);
    }

    #[test]
    fn result_is_independent_of_goal_order() {
        let goals = vec![goal(1, 1, 50), goal(2, 2, 12), goal(3, 1, 12), goal(4, 2, 90)];
        let mut reversed = goals.clone();
        reversed.reverse();
        let mut rotated = goals.clone();
        rotated.rotate_left(2);

        let expected = compute_match_result(&fixture(), goals);

        assert_eq!(compute_match_result(&fixture(), reversed), expected);
        assert_eq!(compute_match_result(&fixture(), rotated), expected);
        let order: Vec<i32> = expected.goals.iter().map(|g| g.goal.id).collect();
        assert_eq!(order, vec![2, 3, 1, 4]);
    }

    #[test]
    fn goals_for_other_teams_count_for_neither_side() {
        let result = compute_match_result(&fixture(), vec![goal(1, 1, 10), goal(2, 3, 20)]);

        assert_eq!(result.team1_goals, 1);
        assert_eq!(result.team2_goals, 0);
        assert_eq!(result.goals.len(), 2);
    }
}
