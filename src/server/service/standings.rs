use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        matches::MatchRepository, parameters::LeagueParametersRepository,
        season::SeasonRepository, team::TeamRepository,
    },
    error::{matches::MatchError, AppError},
    model::{matches::ScoredMatch, team::Team},
    rules::standings::{compute_standings, group_matches_by_team, StandingRow},
};

pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StandingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the league-wide table over every team and every recorded match.
    pub async fn league_table(&self) -> Result<Vec<StandingRow>, AppError> {
        let teams = TeamRepository::new(self.db).get_all().await?;
        let matches = MatchRepository::new(self.db).get_scored(None).await?;

        self.table(&teams, &matches).await
    }

    /// Builds the table for one season, `None` if the season does not exist.
    ///
    /// Rows cover every registered team plus any team that played a match in the
    /// season without being registered, so no recorded result is dropped.
    pub async fn season_table(&self, season_id: i32) -> Result<Option<Vec<StandingRow>>, AppError> {
        let seasons = SeasonRepository::new(self.db);
        if seasons.get_by_id(season_id).await?.is_none() {
            return Ok(None);
        }

        let matches = MatchRepository::new(self.db)
            .get_scored(Some(season_id))
            .await?;
        let mut team_ids: BTreeSet<i32> = seasons
            .get_registered_team_ids(season_id)
            .await?
            .into_iter()
            .collect();
        team_ids.extend(
            matches
                .iter()
                .flat_map(|m| [m.fixture.team1_id, m.fixture.team2_id]),
        );
        let teams = TeamRepository::new(self.db)
            .get_by_ids(team_ids.into_iter().collect())
            .await?;

        Ok(Some(self.table(&teams, &matches).await?))
    }

    async fn table(
        &self,
        teams: &[Team],
        matches: &[ScoredMatch],
    ) -> Result<Vec<StandingRow>, AppError> {
        let parameters = LeagueParametersRepository::new(self.db)
            .get()
            .await?
            .ok_or(MatchError::ConfigurationMissing)?;

        let by_team = group_matches_by_team(matches);

        Ok(compute_standings(teams, &by_team, &parameters))
    }
}
