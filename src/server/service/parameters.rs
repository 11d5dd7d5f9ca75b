use sea_orm::DatabaseConnection;

use crate::server::{
    data::parameters::LeagueParametersRepository,
    error::AppError,
    model::parameters::{LeagueParameters, UpdateLeagueParametersParams},
};

pub struct LeagueParametersService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeagueParametersService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the current league parameters, `None` if never configured.
    pub async fn get(&self) -> Result<Option<LeagueParameters>, AppError> {
        Ok(LeagueParametersRepository::new(self.db).get().await?)
    }

    /// Replaces the league parameters after checking they are consistent.
    ///
    /// Bounds tightened below the current state of existing rosters do not
    /// invalidate those rosters; they only affect later changes.
    ///
    /// # Returns
    /// - `Ok(LeagueParameters)` - Stored parameters
    /// - `Err(AppError::BadRequest)` - Scores or bounds are inconsistent
    pub async fn update(
        &self,
        params: UpdateLeagueParametersParams,
    ) -> Result<LeagueParameters, AppError> {
        validate(&params)?;

        let parameters = LeagueParametersRepository::new(self.db)
            .upsert(params)
            .await?;

        tracing::info!("League parameters updated");

        Ok(parameters)
    }
}

fn validate(params: &UpdateLeagueParametersParams) -> Result<(), AppError> {
    if params.win_score <= params.draw_score || params.draw_score <= params.lose_score {
        return Err(AppError::BadRequest(format!(
            "Scores must satisfy win > draw > lose, got {}/{}/{}",
            params.win_score, params.draw_score, params.lose_score
        )));
    }

    let bounds = [
        ("min_age", params.min_age),
        ("max_age", params.max_age),
        ("min_players", params.min_players),
        ("max_players", params.max_players),
        ("max_foreign_players", params.max_foreign_players),
        ("min_goal_minute", params.min_goal_minute),
        ("max_goal_minute", params.max_goal_minute),
    ];
    if let Some((name, value)) = bounds
        .iter()
        .find_map(|&(name, value)| value.filter(|v| *v < 0).map(|v| (name, v)))
    {
        return Err(AppError::BadRequest(format!(
            "{} must not be negative, got {}",
            name, value
        )));
    }

    let ranges = [
        ("age", params.min_age, params.max_age),
        ("players", params.min_players, params.max_players),
        ("goal_minute", params.min_goal_minute, params.max_goal_minute),
    ];
    for (name, min, max) in ranges {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(AppError::BadRequest(format!(
                    "min_{} ({}) must not exceed max_{} ({})",
                    name, min, name, max
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::rules::standings::StandingCriterion;

    fn params() -> UpdateLeagueParametersParams {
        UpdateLeagueParametersParams {
            min_age: Some(16),
            max_age: Some(40),
            min_players: Some(15),
            max_players: Some(22),
            max_foreign_players: Some(3),
            min_goal_minute: Some(0),
            max_goal_minute: Some(96),
            win_score: 3,
            draw_score: 1,
            lose_score: 0,
            category_sort: StandingCriterion::default_order(),
        }
    }

    #[test]
    fn accepts_consistent_parameters() {
        assert!(validate(&params()).is_ok());
    }

    #[test]
    fn rejects_non_decreasing_scores() {
        let draw_equals_win = UpdateLeagueParametersParams {
            draw_score: 3,
            ..params()
        };
        let lose_above_draw = UpdateLeagueParametersParams {
            lose_score: 2,
            ..params()
        };

        assert!(matches!(validate(&draw_equals_win), Err(AppError::BadRequest(_))));
        assert!(matches!(validate(&lose_above_draw), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_inverted_ranges() {
        let inverted = UpdateLeagueParametersParams {
            min_players: Some(23),
            ..params()
        };

        assert!(matches!(validate(&inverted), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_negative_bounds() {
        let negative = UpdateLeagueParametersParams {
            max_foreign_players: Some(-1),
            ..params()
        };

        assert!(matches!(validate(&negative), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn open_bounds_are_valid() {
        let open = UpdateLeagueParametersParams {
            min_age: None,
            max_players: None,
            max_goal_minute: None,
            ..params()
        };

        assert!(validate(&open).is_ok());
    }
}
