//! Advertisement entity delivered to reading pages.

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AdType {
    #[sea_orm(string_value = "popup")]
    Popup,
    #[sea_orm(string_value = "banner")]
    Banner,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ad")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ad_type: AdType,
    /// Placement slot on the reading page, e.g. "top", "sidebar".
    pub position: String,
    pub image_url: String,
    pub link_url: String,
    pub title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
