use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::{
    model::parameters::{LeagueParameters, UpdateLeagueParametersParams, PARAMETERS_ID},
    rules::standings::StandingCriterion,
};

pub struct LeagueParametersRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeagueParametersRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the league parameter row, `None` if it has never been configured.
    pub async fn get(&self) -> Result<Option<LeagueParameters>, DbErr> {
        let parameters = entity::prelude::LeagueParameters::find_by_id(PARAMETERS_ID)
            .one(self.db)
            .await?;

        Ok(parameters.map(LeagueParameters::from_entity))
    }

    /// Replaces the parameter row, creating it if it does not exist yet.
    pub async fn upsert(
        &self,
        params: UpdateLeagueParametersParams,
    ) -> Result<LeagueParameters, DbErr> {
        let exists = entity::prelude::LeagueParameters::find_by_id(PARAMETERS_ID)
            .one(self.db)
            .await?
            .is_some();

        let active_model = entity::league_parameters::ActiveModel {
            id: ActiveValue::Set(PARAMETERS_ID),
            min_age: ActiveValue::Set(params.min_age),
            max_age: ActiveValue::Set(params.max_age),
            min_players: ActiveValue::Set(params.min_players),
            max_players: ActiveValue::Set(params.max_players),
            max_foreign_players: ActiveValue::Set(params.max_foreign_players),
            min_goal_minute: ActiveValue::Set(params.min_goal_minute),
            max_goal_minute: ActiveValue::Set(params.max_goal_minute),
            win_score: ActiveValue::Set(params.win_score),
            draw_score: ActiveValue::Set(params.draw_score),
            lose_score: ActiveValue::Set(params.lose_score),
            category_sort: ActiveValue::Set(StandingCriterion::join(&params.category_sort)),
        };

        let model = if exists {
            active_model.update(self.db).await?
        } else {
            active_model.insert(self.db).await?
        };

        Ok(LeagueParameters::from_entity(model))
    }
}
