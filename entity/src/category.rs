//! Category entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::story_category::Entity")]
    StoryCategory,
}

impl Related<super::story_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoryCategory.def()
    }
}

impl Related<super::story::Entity> for Entity {
    fn to() -> RelationDef {
        super::story_category::Relation::Story.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::story_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
