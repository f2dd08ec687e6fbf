use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Value drawn from the item sequence; doubles as insertion order
    #[sea_orm(unique)]
    pub seq: i64,
    #[sea_orm(unique)]
    pub human_id: String,
    pub name: String,
    pub category: String,
    pub thickness: String,
    pub side: String,
    pub lamination: String,
    pub size: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub description: String,
    /// JSON-encoded array of image URLs
    pub image_urls: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
