use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub year: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub rating: String,
    #[sea_orm(column_type = "Text")]
    pub review: String,
    pub ranking: i32,
    pub img_url: Option<String>,
    pub status: i32,
    pub added_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
