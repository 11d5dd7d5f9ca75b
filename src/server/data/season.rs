use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::season::{CreateSeasonParams, Season, SeasonTeam};

pub struct SeasonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateSeasonParams) -> Result<Season, DbErr> {
        let season = entity::season::ActiveModel {
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Season::from_entity(season))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Season>, DbErr> {
        let season = entity::prelude::Season::find_by_id(id).one(self.db).await?;

        Ok(season.map(Season::from_entity))
    }

    /// Gets all seasons, most recent start date first.
    pub async fn get_all(&self) -> Result<Vec<Season>, DbErr> {
        let seasons = entity::prelude::Season::find()
            .order_by_desc(entity::season::Column::StartDate)
            .order_by_asc(entity::season::Column::Id)
            .all(self.db)
            .await?;

        Ok(seasons.into_iter().map(Season::from_entity).collect())
    }

    /// Records a team's registration for a season, stamped with the current time.
    pub async fn register_team(&self, season_id: i32, team_id: i32) -> Result<SeasonTeam, DbErr> {
        let registration = entity::season_team::ActiveModel {
            season_id: ActiveValue::Set(season_id),
            team_id: ActiveValue::Set(team_id),
            registered_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SeasonTeam::from_entity(registration))
    }

    pub async fn is_registered(&self, season_id: i32, team_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::SeasonTeam::find()
            .filter(entity::season_team::Column::SeasonId.eq(season_id))
            .filter(entity::season_team::Column::TeamId.eq(team_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the ids of all teams registered for a season.
    pub async fn get_registered_team_ids(&self, season_id: i32) -> Result<Vec<i32>, DbErr> {
        let registrations = entity::prelude::SeasonTeam::find()
            .filter(entity::season_team::Column::SeasonId.eq(season_id))
            .all(self.db)
            .await?;

        Ok(registrations.into_iter().map(|r| r.team_id).collect())
    }
}
