//! League standings table.
//!
//! Rows are accumulated from every match a team played and ordered by the league's
//! configured tie-break criteria. Ordering works as a reducer over tie groups: all
//! rows start in one group, and each criterion in turn stably sorts every group that
//! still holds more than one row and splits it where the criterion's key changes.
//! Rows that remain tied after the last criterion keep their input order.

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    fmt,
    str::FromStr,
};

use thiserror::Error;

use crate::{
    model::standings::StandingRowDto,
    server::model::{matches::ScoredMatch, parameters::LeagueParameters, team::Team},
};

/// A tie-break criterion for ordering standings rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandingCriterion {
    Points,
    GoalDifference,
    GoalsFor,
    /// Fewer goals conceded ranks higher.
    GoalsAgainst,
    Won,
    /// Mini-table over the matches played among the tied teams only.
    HeadToHead,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown standings criterion '{0}'")]
pub struct UnknownCriterion(pub String);

impl StandingCriterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::GoalDifference => "goal_difference",
            Self::GoalsFor => "goals_for",
            Self::GoalsAgainst => "goals_against",
            Self::Won => "won",
            Self::HeadToHead => "head_to_head",
        }
    }

    /// Ordering used when no usable criteria are configured.
    pub fn default_order() -> Vec<Self> {
        vec![Self::Points, Self::GoalDifference, Self::GoalsFor]
    }

    /// Parses a comma separated criterion list as stored in the parameter row.
    ///
    /// Unknown names are logged and skipped. A list with no recognised names yields
    /// the default order.
    pub fn parse_list(value: &str) -> Vec<Self> {
        let criteria: Vec<Self> = value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .filter_map(|name| match name.parse::<Self>() {
                Ok(criterion) => Some(criterion),
                Err(e) => {
                    tracing::warn!("Skipping standings criterion: {}", e);
                    None
                }
            })
            .collect();

        if criteria.is_empty() {
            Self::default_order()
        } else {
            criteria
        }
    }

    /// Joins criteria into the comma separated form stored in the parameter row.
    pub fn join(criteria: &[Self]) -> String {
        criteria
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for StandingCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandingCriterion {
    type Err = UnknownCriterion;

    /// Accepts any letter case with `-`, `_` or camelCase word boundaries, so
    /// `goal_difference`, `goal-difference` and `goalDifference` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "points" => Ok(Self::Points),
            "goaldifference" => Ok(Self::GoalDifference),
            "goalsfor" => Ok(Self::GoalsFor),
            "goalsagainst" => Ok(Self::GoalsAgainst),
            "won" => Ok(Self::Won),
            "headtohead" => Ok(Self::HeadToHead),
            _ => Err(UnknownCriterion(s.to_string())),
        }
    }
}

/// One team's line in the standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub team_id: i32,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: i32,
}

impl StandingRow {
    fn empty(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Converts the row for the table view; `position` is 1-based.
    pub fn into_dto(self, position: u32) -> StandingRowDto {
        StandingRowDto {
            position,
            team_id: self.team_id,
            team_name: self.team_name,
            played: self.played,
            won: self.won,
            drawn: self.drawn,
            lost: self.lost,
            goals_for: self.goals_for,
            goals_against: self.goals_against,
            goal_difference: self.goal_difference,
            points: self.points,
        }
    }
}

/// Indexes matches by each participating team.
pub fn group_matches_by_team(matches: &[ScoredMatch]) -> HashMap<i32, Vec<&ScoredMatch>> {
    let mut by_team: HashMap<i32, Vec<&ScoredMatch>> = HashMap::new();
    for scored in matches {
        by_team.entry(scored.fixture.team1_id).or_default().push(scored);
        by_team.entry(scored.fixture.team2_id).or_default().push(scored);
    }
    by_team
}

/// Builds the ordered standings table.
///
/// # Arguments
/// - `teams` - Teams to rank, in the order ties should finally resolve to
/// - `matches_by_team` - Every match each team played, see `group_matches_by_team`
/// - `parameters` - Scoring values and tie-break order
///
/// # Returns
/// One row per team, including teams without matches, best first.
pub fn compute_standings(
    teams: &[Team],
    matches_by_team: &HashMap<i32, Vec<&ScoredMatch>>,
    parameters: &LeagueParameters,
) -> Vec<StandingRow> {
    let rows: Vec<StandingRow> = teams
        .iter()
        .map(|team| {
            let mut row = StandingRow::empty(team);
            let matches = matches_by_team.get(&team.id).map(Vec::as_slice).unwrap_or(&[]);
            for scored in matches {
                let Some(opponent_id) = opponent_of(scored, team.id) else {
                    continue;
                };
                let goals_for = scored.goals_by(team.id);
                let goals_against = scored.goals_by(opponent_id);

                row.played += 1;
                row.goals_for += goals_for;
                row.goals_against += goals_against;
                if goals_for > goals_against {
                    row.won += 1;
                } else if goals_for == goals_against {
                    row.drawn += 1;
                } else {
                    row.lost += 1;
                }
            }
            row.goal_difference = row.goals_for as i32 - row.goals_against as i32;
            row.points = row.won as i32 * parameters.win_score
                + row.drawn as i32 * parameters.draw_score
                + row.lost as i32 * parameters.lose_score;
            row
        })
        .collect();

    let criteria = if parameters.category_sort.is_empty() {
        StandingCriterion::default_order()
    } else {
        parameters.category_sort.clone()
    };

    let mut groups = vec![rows];
    for criterion in criteria {
        groups = groups
            .into_iter()
            .flat_map(|group| split_group(group, criterion, matches_by_team, parameters))
            .collect();
    }

    groups.into_iter().flatten().collect()
}

fn opponent_of(scored: &ScoredMatch, team_id: i32) -> Option<i32> {
    if scored.fixture.team1_id == team_id {
        Some(scored.fixture.team2_id)
    } else if scored.fixture.team2_id == team_id {
        Some(scored.fixture.team1_id)
    } else {
        None
    }
}

/// Sort key where a larger value ranks higher.
type RankKey = (i64, i64, i64);

fn split_group(
    mut group: Vec<StandingRow>,
    criterion: StandingCriterion,
    matches_by_team: &HashMap<i32, Vec<&ScoredMatch>>,
    parameters: &LeagueParameters,
) -> Vec<Vec<StandingRow>> {
    if group.len() < 2 {
        return vec![group];
    }

    let keys: HashMap<i32, RankKey> = match criterion {
        StandingCriterion::HeadToHead => head_to_head_keys(&group, matches_by_team, parameters),
        _ => group
            .iter()
            .map(|row| (row.team_id, (rank_value(row, criterion), 0, 0)))
            .collect(),
    };
    let key_of = |row: &StandingRow| keys.get(&row.team_id).copied().unwrap_or_default();

    group.sort_by(|a, b| key_of(b).cmp(&key_of(a)));

    let mut groups: Vec<Vec<StandingRow>> = Vec::new();
    let mut current_key: Option<RankKey> = None;
    for row in group {
        let key = key_of(&row);
        match groups.last_mut() {
            Some(last) if current_key == Some(key) => last.push(row),
            _ => {
                groups.push(vec![row]);
                current_key = Some(key);
            }
        }
    }
    groups
}

fn rank_value(row: &StandingRow, criterion: StandingCriterion) -> i64 {
    match criterion {
        StandingCriterion::Points => row.points as i64,
        StandingCriterion::GoalDifference => row.goal_difference as i64,
        StandingCriterion::GoalsFor => row.goals_for as i64,
        StandingCriterion::GoalsAgainst => -(row.goals_against as i64),
        StandingCriterion::Won => row.won as i64,
        StandingCriterion::HeadToHead => 0,
    }
}

/// Mini-table keys (points, goal difference, goals for) over matches played
/// between teams of the group.
fn head_to_head_keys(
    group: &[StandingRow],
    matches_by_team: &HashMap<i32, Vec<&ScoredMatch>>,
    parameters: &LeagueParameters,
) -> HashMap<i32, RankKey> {
    let members: HashSet<i32> = group.iter().map(|row| row.team_id).collect();

    group
        .iter()
        .map(|row| {
            let (mut points, mut difference, mut scored_total) = (0i64, 0i64, 0i64);
            let matches = matches_by_team.get(&row.team_id).map(Vec::as_slice).unwrap_or(&[]);
            for scored in matches {
                let Some(opponent_id) = opponent_of(scored, row.team_id) else {
                    continue;
                };
                if !members.contains(&opponent_id) {
                    continue;
                }
                let goals_for = scored.goals_by(row.team_id) as i64;
                let goals_against = scored.goals_by(opponent_id) as i64;

                let earned = match goals_for.cmp(&goals_against) {
                    Ordering::Greater => parameters.win_score,
                    Ordering::Equal => parameters.draw_score,
                    Ordering::Less => parameters.lose_score,
                };
                points += earned as i64;
                difference += goals_for - goals_against;
                scored_total += goals_for;
            }
            (row.team_id, (points, difference, scored_total))
        })
        .collect()
}
