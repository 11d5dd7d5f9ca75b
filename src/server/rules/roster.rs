//! Roster eligibility rules.
//!
//! Decides whether a player may be added to a team, moved between teams, or whether a
//! team may enter a season. The checks run in a fixed order so that the first failing
//! rule determines the reported rejection.

use chrono::{Datelike, NaiveDate};

use crate::server::{
    error::roster::RosterError,
    model::{
        parameters::LeagueParameters,
        player::{Player, PlayerType},
    },
};

/// Attributes of a player about to be registered that the eligibility rules look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterCandidate {
    pub team_id: i32,
    pub player_type_id: i32,
    pub birth_date: Option<NaiveDate>,
}

/// Requested changes to an existing player; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterChanges {
    pub team_id: Option<i32>,
    pub player_type_id: Option<i32>,
    pub birth_date: Option<NaiveDate>,
}

/// Eligibility checks evaluated against one parameter snapshot and one calendar date.
pub struct RosterRules<'a> {
    parameters: &'a LeagueParameters,
    today: NaiveDate,
}

impl<'a> RosterRules<'a> {
    pub fn new(parameters: &'a LeagueParameters, today: NaiveDate) -> Self {
        Self { parameters, today }
    }

    /// Validates registering a new player.
    ///
    /// # Arguments
    /// - `candidate` - Birth date and team/type of the new player
    /// - `player_type` - The candidate's player type, `None` if it does not exist
    /// - `roster` - Current players of the candidate's team
    ///
    /// # Returns
    /// - `Ok(())` - Player may be registered
    /// - `Err(RosterError)` - First failing rule: age, type, squad size, foreign quota
    pub fn validate_create(
        &self,
        candidate: &RosterCandidate,
        player_type: Option<&PlayerType>,
        roster: &[Player],
    ) -> Result<(), RosterError> {
        if let Some(birth_date) = candidate.birth_date {
            self.check_age(birth_date)?;
        }

        let player_type = player_type.ok_or(RosterError::TypeNotFound {
            player_type_id: candidate.player_type_id,
        })?;

        self.check_size(roster.len())?;

        if player_type.is_foreign() {
            self.check_foreign_quota(count_foreign(roster))?;
        }

        Ok(())
    }

    /// Validates changing an existing player's birth date, team or type.
    ///
    /// Size and quota are only re-checked when the player actually joins the
    /// destination team or its foreign group; an update that keeps team and type
    /// never fails on either, even if the league bounds were lowered since.
    ///
    /// # Arguments
    /// - `existing` - The player as currently stored
    /// - `changes` - Requested changes
    /// - `final_type` - Player type after the update, `None` if it does not exist
    /// - `destination_roster` - Current players of the team after the update
    ///
    /// # Returns
    /// - `Ok(())` - Update is allowed
    /// - `Err(RosterError)` - First failing rule
    pub fn validate_update(
        &self,
        existing: &Player,
        changes: &RosterChanges,
        final_type: Option<&PlayerType>,
        destination_roster: &[Player],
    ) -> Result<(), RosterError> {
        let final_team_id = changes.team_id.unwrap_or(existing.team_id);
        let final_type_id = changes
            .player_type_id
            .unwrap_or(existing.player_type.id);

        if let Some(birth_date) = changes.birth_date {
            self.check_age(birth_date)?;
        }

        let final_type = final_type.ok_or(RosterError::TypeNotFound {
            player_type_id: final_type_id,
        })?;

        let others: Vec<&Player> = destination_roster
            .iter()
            .filter(|p| p.id != existing.id)
            .collect();

        let changes_team = final_team_id != existing.team_id;
        if changes_team {
            self.check_size(others.len())?;
        }

        let joins_foreign_group = final_type.is_foreign()
            && (changes_team || !existing.is_foreign());
        if joins_foreign_group {
            let foreign = others.iter().filter(|p| p.is_foreign()).count();
            self.check_foreign_quota(foreign)?;
        }

        Ok(())
    }

    /// Validates a team's application to enter a season.
    ///
    /// This is the only place the league minimum squad size is enforced.
    pub fn validate_season_application(&self, roster_size: usize) -> Result<(), RosterError> {
        if let Some(min_players) = self.parameters.min_players {
            if !reaches(roster_size, min_players) {
                return Err(RosterError::InsufficientRoster {
                    current: roster_size,
                    min_players,
                });
            }
        }

        Ok(())
    }

    fn check_age(&self, birth_date: NaiveDate) -> Result<(), RosterError> {
        let age = age_on(birth_date, self.today);

        if let Some(min_age) = self.parameters.min_age {
            if age < min_age {
                return Err(RosterError::AgeTooLow { age, min_age });
            }
        }
        if let Some(max_age) = self.parameters.max_age {
            if age > max_age {
                return Err(RosterError::AgeTooHigh { age, max_age });
            }
        }

        Ok(())
    }

    fn check_size(&self, current: usize) -> Result<(), RosterError> {
        match self.parameters.max_players {
            Some(max_players) if reaches(current, max_players) => {
                Err(RosterError::RosterFull {
                    current,
                    max_players,
                })
            }
            _ => Ok(()),
        }
    }

    fn check_foreign_quota(&self, current: usize) -> Result<(), RosterError> {
        match self.parameters.max_foreign_players {
            Some(max_foreign_players) if reaches(current, max_foreign_players) => {
                Err(RosterError::ForeignQuotaExceeded {
                    current,
                    max_foreign_players,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Age in whole years on the given date.
///
/// A birthday on 29 February is reached on 1 March in non-leap years.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Whether a count has reached an inclusive bound; a negative bound is always reached.
fn reaches(count: usize, bound: i32) -> bool {
    usize::try_from(bound).map_or(true, |bound| count >= bound)
}

fn count_foreign(roster: &[Player]) -> usize {
    roster.iter().filter(|p| p.is_foreign()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 15)
    }

    fn domestic() -> PlayerType {
        PlayerType {
            id: 1,
            name: "domestic".to_string(),
        }
    }

    fn foreign() -> PlayerType {
        PlayerType {
            id: 2,
            name: "Foreign".to_string(),
        }
    }

    fn player(id: i32, team_id: i32, player_type: PlayerType) -> Player {
        Player {
            id,
            team_id,
            player_type,
            name: format!("Player {}", id),
            birth_date: None,
            shirt_number: None,
            note: None,
        }
    }

    fn roster(team_id: i32, domestic_count: i32, foreign_count: i32) -> Vec<Player> {
        let mut players = Vec::new();
        for i in 0..domestic_count {
            players.push(player(100 + i, team_id, domestic()));
        }
        for i in 0..foreign_count {
            players.push(player(200 + i, team_id, foreign()));
        }
        players
    }

    fn candidate(birth_date: Option<NaiveDate>, player_type: &PlayerType) -> RosterCandidate {
        RosterCandidate {
            team_id: 1,
            player_type_id: player_type.id,
            birth_date,
        }
    }

    mod age {
        use super::*;

        #[test]
        fn counts_whole_years() {
            assert_eq!(age_on(date(2000, 6, 15), today()), 25);
            assert_eq!(age_on(date(2000, 6, 16), today()), 24);
            assert_eq!(age_on(date(2000, 1, 1), today()), 25);
        }

        #[test]
        fn leap_day_birthday_is_reached_on_first_of_march() {
            let birth = date(2008, 2, 29);

            assert_eq!(age_on(birth, date(2025, 2, 28)), 16);
            assert_eq!(age_on(birth, date(2025, 3, 1)), 17);
            assert_eq!(age_on(birth, date(2028, 2, 29)), 20);
        }

        #[test]
        fn rejects_outside_bounds_and_accepts_boundary() {
            let parameters = LeagueParameters {
                min_age: Some(16),
                max_age: Some(40),
                ..Default::default()
            };
            let rules = RosterRules::new(&parameters, today());
            let t = domestic();

            let too_old =
                rules.validate_create(&candidate(Some(date(1984, 1, 1)), &t), Some(&t), &[]);
            assert_eq!(too_old, Err(RosterError::AgeTooHigh { age: 41, max_age: 40 }));

            let too_young =
                rules.validate_create(&candidate(Some(date(2010, 1, 1)), &t), Some(&t), &[]);
            assert_eq!(too_young, Err(RosterError::AgeTooLow { age: 15, min_age: 16 }));

            let sixteen =
                rules.validate_create(&candidate(Some(date(2009, 1, 1)), &t), Some(&t), &[]);
            assert_eq!(sixteen, Ok(()));
        }

        #[test]
        fn missing_birth_date_never_rejects_on_age() {
            let parameters = LeagueParameters {
                min_age: Some(30),
                max_age: Some(30),
                ..Default::default()
            };
            let rules = RosterRules::new(&parameters, today());
            let t = domestic();

            assert_eq!(rules.validate_create(&candidate(None, &t), Some(&t), &[]), Ok(()));
        }
    }

    mod create {
        use super::*;

        #[test]
        fn rejects_full_roster_and_allows_one_below() {
            let parameters = LeagueParameters {
                max_players: Some(3),
                ..Default::default()
            };
            let rules = RosterRules::new(&parameters, today());
            let t = domestic();

            assert_eq!(
                rules.validate_create(&candidate(None, &t), Some(&t), &roster(1, 3, 0)),
                Err(RosterError::RosterFull {
                    current: 3,
                    max_players: 3
                })
            );
            assert_eq!(
                rules.validate_create(&candidate(None, &t), Some(&t), &roster(1, 2, 0)),
                Ok(())
            );
        }

        #[test]
        fn foreign_quota_only_applies_to_foreign_players() {
            let parameters = LeagueParameters {
                max_foreign_players: Some(2),
                ..Default::default()
            };
            let rules = RosterRules::new(&parameters, today());
            let team = roster(1, 5, 2);
            let f = foreign();
            let d = domestic();

            assert_eq!(
                rules.validate_create(&candidate(None, &f), Some(&f), &team),
                Err(RosterError::ForeignQuotaExceeded {
                    current: 2,
                    max_foreign_players: 2
                })
            );
            assert_eq!(rules.validate_create(&candidate(None, &d), Some(&d), &team), Ok(()));
        }

        #[test]
        fn reports_age_before_missing_type() {
            let parameters = LeagueParameters {
                min_age: Some(18),
                ..Default::default()
            };
            let rules = RosterRules::new(&parameters, today());
            let t = domestic();

            let result = rules.validate_create(&candidate(Some(date(2015, 1, 1)), &t), None, &[]);
            assert!(matches!(result, Err(RosterError::AgeTooLow { .. })));

            let result = rules.validate_create(&candidate(None, &t), None, &[]);
            assert_eq!(result, Err(RosterError::TypeNotFound { player_type_id: 1 }));
        }

        #[test]
        fn reports_size_before_quota() {
            let parameters = LeagueParameters {
                max_players: Some(4),
                max_foreign_players: Some(1),
                ..Default::default()
            };
            let rules = RosterRules::new(&parameters, today());
            let f = foreign();

            let result = rules.validate_create(&candidate(None, &f), Some(&f), &roster(1, 2, 2));
            assert!(matches!(result, Err(RosterError::RosterFull { .. })));
        }

        #[test]
        fn unbounded_league_accepts_anything() {
            let parameters = LeagueParameters::default();
            let rules = RosterRules::new(&parameters, today());
            let f = foreign();

            let result = rules.validate_create(
                &candidate(Some(date(1950, 1, 1)), &f),
                Some(&f),
                &roster(1, 40, 40),
            );
            assert_eq!(result, Ok(()));
        }
    }

    mod update {
        use super::*;

        fn strict() -> LeagueParameters {
            LeagueParameters {
                max_players: Some(2),
                max_foreign_players: Some(1),
                ..Default::default()
            }
        }

        #[test]
        fn unchanged_team_and_type_never_rejects_on_size_or_quota() {
            let parameters = strict();
            let rules = RosterRules::new(&parameters, today());
            let team = roster(1, 3, 3);
            let existing = team[4].clone();

            let changes = RosterChanges::default();
            let result = rules.validate_update(&existing, &changes, Some(&foreign()), &team);
            assert_eq!(result, Ok(()));

            let changes = RosterChanges {
                team_id: Some(1),
                player_type_id: Some(2),
                birth_date: None,
            };
            let result = rules.validate_update(&existing, &changes, Some(&foreign()), &team);
            assert_eq!(result, Ok(()));
        }

        #[test]
        fn moving_to_full_team_is_rejected() {
            let parameters = strict();
            let rules = RosterRules::new(&parameters, today());
            let existing = player(1, 1, domestic());
            let destination = roster(2, 2, 0);
            let changes = RosterChanges {
                team_id: Some(2),
                ..Default::default()
            };

            let result =
                rules.validate_update(&existing, &changes, Some(&domestic()), &destination);
            assert_eq!(
                result,
                Err(RosterError::RosterFull {
                    current: 2,
                    max_players: 2
                })
            );
        }

        #[test]
        fn becoming_foreign_on_same_team_checks_quota() {
            let parameters = strict();
            let rules = RosterRules::new(&parameters, today());
            let mut team = roster(1, 1, 1);
            let existing = player(1, 1, domestic());
            team.push(existing.clone());
            let changes = RosterChanges {
                player_type_id: Some(2),
                ..Default::default()
            };

            let result = rules.validate_update(&existing, &changes, Some(&foreign()), &team);
            assert_eq!(
                result,
                Err(RosterError::ForeignQuotaExceeded {
                    current: 1,
                    max_foreign_players: 1
                })
            );
        }

        #[test]
        fn foreign_player_changing_team_checks_destination_quota() {
            let parameters = LeagueParameters {
                max_foreign_players: Some(1),
                ..Default::default()
            };
            let rules = RosterRules::new(&parameters, today());
            let existing = player(1, 1, foreign());
            let changes = RosterChanges {
                team_id: Some(2),
                ..Default::default()
            };

            let result =
                rules.validate_update(&existing, &changes, Some(&foreign()), &roster(2, 0, 1));
            assert!(matches!(result, Err(RosterError::ForeignQuotaExceeded { .. })));

            let result =
                rules.validate_update(&existing, &changes, Some(&foreign()), &roster(2, 4, 0));
            assert_eq!(result, Ok(()));
        }

        #[test]
        fn becoming_domestic_never_checks_quota() {
            let parameters = LeagueParameters {
                max_foreign_players: Some(0),
                ..Default::default()
            };
            let rules = RosterRules::new(&parameters, today());
            let existing = player(1, 1, foreign());
            let changes = RosterChanges {
                team_id: Some(2),
                player_type_id: Some(1),
                birth_date: None,
            };

            let result =
                rules.validate_update(&existing, &changes, Some(&domestic()), &roster(2, 0, 3));
            assert_eq!(result, Ok(()));
        }

        #[test]
        fn age_is_only_checked_when_birth_date_changes() {
            let parameters = LeagueParameters {
                max_age: Some(30),
                ..Default::default()
            };
            let rules = RosterRules::new(&parameters, today());
            let mut existing = player(1, 1, domestic());
            existing.birth_date = Some(date(1970, 1, 1));

            let result = rules.validate_update(
                &existing,
                &RosterChanges::default(),
                Some(&domestic()),
                &[],
            );
            assert_eq!(result, Ok(()));

            let changes = RosterChanges {
                birth_date: Some(date(1980, 1, 1)),
                ..Default::default()
            };
            let result = rules.validate_update(&existing, &changes, Some(&domestic()), &[]);
            assert_eq!(result, Err(RosterError::AgeTooHigh { age: 45, max_age: 30 }));
        }

        #[test]
        fn missing_new_type_is_reported() {
            let parameters = LeagueParameters::default();
            let rules = RosterRules::new(&parameters, today());
            let existing = player(1, 1, domestic());
            let changes = RosterChanges {
                player_type_id: Some(99),
                ..Default::default()
            };

            let result = rules.validate_update(&existing, &changes, None, &[]);
            assert_eq!(result, Err(RosterError::TypeNotFound { player_type_id: 99 }));
        }
    }

    mod season_application {
        use super::*;

        #[test]
        fn enforces_minimum_roster() {
            let parameters = LeagueParameters {
                min_players: Some(11),
                ..Default::default()
            };
            let rules = RosterRules::new(&parameters, today());

            assert_eq!(
                rules.validate_season_application(10),
                Err(RosterError::InsufficientRoster {
                    current: 10,
                    min_players: 11
                })
            );
            assert_eq!(rules.validate_season_application(11), Ok(()));
        }

        #[test]
        fn no_minimum_accepts_empty_roster() {
            let parameters = LeagueParameters::default();
            let rules = RosterRules::new(&parameters, today());

            assert_eq!(rules.validate_season_application(0), Ok(()));
        }
    }

    mod bounds {
        use super::*;

        #[test]
        fn reaches_inclusive_bound() {
            assert!(!reaches(2, 3));
            assert!(reaches(3, 3));
            assert!(reaches(0, 0));
        }

        #[test]
        fn negative_bound_is_always_reached() {
            assert!(reaches(0, -1));

            let parameters = LeagueParameters {
                max_players: Some(-1),
                min_players: Some(-1),
                ..Default::default()
            };
            let rules = RosterRules::new(&parameters, today());

            assert_eq!(
                rules.validate_create(&candidate(None, &domestic()), Some(&domestic()), &[]),
                Err(RosterError::RosterFull {
                    current: 0,
                    max_players: -1
                })
            );
            assert_eq!(rules.validate_season_application(0), Ok(()));
        }
    }
}
