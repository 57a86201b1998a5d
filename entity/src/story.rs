//! Story entity.

use sea_orm::entity::prelude::*;

/// Editorial lifecycle of a story.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum StoryStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
    #[sea_orm(string_value = "archived")]
    Archived,
    #[sea_orm(string_value = "ongoing")]
    Ongoing,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl Default for StoryStatus {
    fn default() -> Self {
        Self::Draft
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "story")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub author_id: i32,
    /// Denormalized display name, kept so listings avoid a join.
    pub author_name: String,
    pub status: StoryStatus,
    pub is_published: bool,
    pub is_recommended: bool,
    pub tags: Option<String>,
    pub country: Option<String>,
    pub view_count: i64,
    pub like_count: i64,
    pub follow_count: i64,
    pub rating: f64,
    pub rating_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(has_many = "super::chapter::Entity")]
    Chapter,
    #[sea_orm(has_many = "super::story_category::Entity")]
    StoryCategory,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::chapter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chapter.def()
    }
}

impl Related<super::story_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoryCategory.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::story_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::story_category::Relation::Story.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
