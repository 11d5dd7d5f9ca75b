use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::team::{CreateTeamParams, Team, UpdateTeamParams};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            stadium: ActiveValue::Set(params.stadium),
            coach: ActiveValue::Set(params.coach),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(team))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let team = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(team.map(Team::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DbErr> {
        let team = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(team.map(Team::from_entity))
    }

    /// Gets all teams ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let teams = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(teams.into_iter().map(Team::from_entity).collect())
    }

    /// Gets the given teams ordered by name; unknown ids are ignored.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Team>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(ids))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(teams.into_iter().map(Team::from_entity).collect())
    }

    /// Updates the provided fields of a team.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Updated team
    /// - `Ok(None)` - No team with that id
    pub async fn update(&self, params: UpdateTeamParams) -> Result<Option<Team>, DbErr> {
        let Some(team) = entity::prelude::Team::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::team::ActiveModel = team.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(stadium) = params.stadium {
            active_model.stadium = ActiveValue::Set(Some(stadium));
        }
        if let Some(coach) = params.coach {
            active_model.coach = ActiveValue::Set(Some(coach));
        }

        let team = active_model.update(self.db).await?;

        Ok(Some(Team::from_entity(team)))
    }

    /// Deletes a team; its players, registrations and matches go with it.
    ///
    /// # Returns
    /// - `Ok(true)` - Team deleted
    /// - `Ok(false)` - No team with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
