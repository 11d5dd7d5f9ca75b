use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::player::{
    CreatePlayerParams, Player, PlayerType, UpdatePlayerParams,
};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a player and returns it with its player type resolved.
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, DbErr> {
        let player = entity::player::ActiveModel {
            team_id: ActiveValue::Set(params.team_id),
            player_type_id: ActiveValue::Set(params.player_type_id),
            name: ActiveValue::Set(params.name),
            birth_date: ActiveValue::Set(params.birth_date),
            shirt_number: ActiveValue::Set(params.shirt_number),
            note: ActiveValue::Set(params.note),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(player.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Player with id {} not found after creation",
                player.id
            )))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let result = entity::prelude::Player::find_by_id(id)
            .find_also_related(entity::prelude::PlayerType)
            .one(self.db)
            .await?;

        result
            .map(|(player, player_type)| Player::from_entity(player, player_type))
            .transpose()
    }

    /// Gets a team's roster ordered by shirt number, then name.
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<Player>, DbErr> {
        let players = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .find_also_related(entity::prelude::PlayerType)
            .order_by_asc(entity::player::Column::ShirtNumber)
            .order_by_asc(entity::player::Column::Name)
            .all(self.db)
            .await?;

        players
            .into_iter()
            .map(|(player, player_type)| Player::from_entity(player, player_type))
            .collect()
    }

    /// Applies the provided fields of `params` to an existing player.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Updated player
    /// - `Ok(None)` - No player with that id
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Option<Player>, DbErr> {
        let Some(player) = entity::prelude::Player::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::player::ActiveModel = player.into();
        if let Some(team_id) = params.team_id {
            active_model.team_id = ActiveValue::Set(team_id);
        }
        if let Some(player_type_id) = params.player_type_id {
            active_model.player_type_id = ActiveValue::Set(player_type_id);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(birth_date) = params.birth_date {
            active_model.birth_date = ActiveValue::Set(Some(birth_date));
        }
        if let Some(shirt_number) = params.shirt_number {
            active_model.shirt_number = ActiveValue::Set(Some(shirt_number));
        }
        if let Some(note) = params.note {
            active_model.note = ActiveValue::Set(Some(note));
        }

        let player = active_model.update(self.db).await?;

        self.get_by_id(player.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

pub struct PlayerTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PlayerType>, DbErr> {
        let player_type = entity::prelude::PlayerType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(player_type.map(PlayerType::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<PlayerType>, DbErr> {
        let types = entity::prelude::PlayerType::find()
            .order_by_asc(entity::player_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(types.into_iter().map(PlayerType::from_entity).collect())
    }
}
