use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub player_type_id: i32,
    pub name: String,
    pub birth_date: Option<Date>,
    pub shirt_number: Option<i32>,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::player_type::Entity",
        from = "Column::PlayerTypeId",
        to = "super::player_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    PlayerType,
    #[sea_orm(has_many = "super::goal::Entity")]
    Goal,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::player_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerType.def()
    }
}

impl Related<super::goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
