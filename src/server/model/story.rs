//! Story domain models and parameters.

use chrono::{DateTime, Utc};
use entity::story::StoryStatus;

use crate::{
    model::story::{StoryDto, StoryListItemDto},
    server::model::category::Category,
};

/// Story detail with its categories resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub author_id: i32,
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
    pub categories: Vec<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Story {
    pub fn from_entity(
        entity: entity::story::Model,
        categories: Vec<entity::category::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
            cover_image: entity.cover_image,
            author_id: entity.author_id,
            author_name: entity.author_name,
            status: entity.status,
            is_published: entity.is_published,
            is_recommended: entity.is_recommended,
            tags: entity.tags,
            country: entity.country,
            view_count: entity.view_count,
            like_count: entity.like_count,
            follow_count: entity.follow_count,
            rating: entity.rating,
            rating_count: entity.rating_count,
            categories: categories.into_iter().map(Category::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> StoryDto {
        StoryDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            cover_image: self.cover_image,
            author_id: self.author_id,
            author_name: self.author_name,
            status: status_to_str(&self.status).to_string(),
            is_published: self.is_published,
            is_recommended: self.is_recommended,
            tags: self.tags,
            country: self.country,
            view_count: self.view_count,
            like_count: self.like_count,
            follow_count: self.follow_count,
            rating: self.rating,
            rating_count: self.rating_count,
            categories: self.categories.into_iter().map(|c| c.into_dto()).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Story summary for list views, with a chapter count instead of relations.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryListItem {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub author_id: i32,
    pub author_name: String,
    pub status: StoryStatus,
    pub is_published: bool,
    pub is_recommended: bool,
    pub view_count: i64,
    pub like_count: i64,
    pub follow_count: i64,
    pub rating: f64,
    pub rating_count: i32,
    pub chapter_count: u64,
    pub updated_at: DateTime<Utc>,
}

impl StoryListItem {
    pub fn from_entity(entity: entity::story::Model, chapter_count: u64) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
            cover_image: entity.cover_image,
            author_id: entity.author_id,
            author_name: entity.author_name,
            status: entity.status,
            is_published: entity.is_published,
            is_recommended: entity.is_recommended,
            view_count: entity.view_count,
            like_count: entity.like_count,
            follow_count: entity.follow_count,
            rating: entity.rating,
            rating_count: entity.rating_count,
            chapter_count,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> StoryListItemDto {
        StoryListItemDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            cover_image: self.cover_image,
            author_id: self.author_id,
            author_name: self.author_name,
            status: status_to_str(&self.status).to_string(),
            is_published: self.is_published,
            is_recommended: self.is_recommended,
            view_count: self.view_count,
            like_count: self.like_count,
            follow_count: self.follow_count,
            rating: self.rating,
            rating_count: self.rating_count,
            chapter_count: self.chapter_count,
            updated_at: self.updated_at,
        }
    }
}

pub fn status_to_str(status: &StoryStatus) -> &'static str {
    match status {
        StoryStatus::Draft => "draft",
        StoryStatus::Published => "published",
        StoryStatus::Archived => "archived",
        StoryStatus::Ongoing => "ongoing",
        StoryStatus::Completed => "completed",
    }
}

pub fn str_to_status(value: &str) -> Option<StoryStatus> {
    match value {
        "draft" => Some(StoryStatus::Draft),
        "published" => Some(StoryStatus::Published),
        "archived" => Some(StoryStatus::Archived),
        "ongoing" => Some(StoryStatus::Ongoing),
        "completed" => Some(StoryStatus::Completed),
        _ => None,
    }
}

/// Parameters for creating a story. The service derives the slug and the
/// denormalized author name before the repository insert.
#[derive(Debug, Clone)]
pub struct CreateStoryParams {
    pub author_id: i32,
    pub author_name: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<String>,
    pub country: Option<String>,
    pub category_ids: Vec<i32>,
}

/// Parameters for updating a story. `slug` is Some only when the title
/// changed and a new slug was derived.
#[derive(Debug, Clone)]
pub struct UpdateStoryParams {
    pub id: i32,
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<String>,
    pub country: Option<String>,
    pub status: StoryStatus,
    pub category_ids: Vec<i32>,
}

/// Sort key for story listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorySort {
    CreatedAt,
    UpdatedAt,
    ViewCount,
    Rating,
    Title,
}

impl StorySort {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            "view_count" => Some(Self::ViewCount),
            "rating" => Some(Self::Rating),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Filter and ordering for story listings. Public listings set
/// `published_only`; the author dashboard scopes by `author_id`; the admin
/// listing leaves both open.
#[derive(Debug, Clone)]
pub struct StoryFilter {
    pub search: Option<String>,
    pub status: Option<StoryStatus>,
    pub category_id: Option<i32>,
    pub author_id: Option<i32>,
    pub published_only: bool,
    pub sort_by: StorySort,
    pub sort_order: SortOrder,
}

impl Default for StoryFilter {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            category_id: None,
            author_id: None,
            published_only: false,
            sort_by: StorySort::UpdatedAt,
            sort_order: SortOrder::Desc,
        }
    }
}
