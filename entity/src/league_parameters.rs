use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "league_parameters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
    pub max_foreign_players: Option<i32>,
    pub min_goal_minute: Option<i32>,
    pub max_goal_minute: Option<i32>,
    pub win_score: i32,
    pub draw_score: i32,
    pub lose_score: i32,
    pub category_sort: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
