use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub name: String,
    /// Canonical marketplace identifiers. The seeder never writes these;
    /// the bot fills them in once a listing has been matched.
    pub upc: Option<String>,
    pub mpn: Option<String>,
    pub asin: Option<String>,
    pub attrs_json: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
