use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::category::CategoryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoryDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub author_id: i32,
    pub author_name: String,
    pub status: String,
    pub is_published: bool,
    pub is_recommended: bool,
    pub tags: Option<String>,
    pub country: Option<String>,
    pub view_count: i64,
    pub like_count: i64,
    pub follow_count: i64,
    pub rating: f64,
    pub rating_count: i32,
    pub categories: Vec<CategoryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Story summary for list views; chapter_count replaces the full relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoryListItemDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub author_id: i32,
    pub author_name: String,
    pub status: String,
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

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateStoryDto {
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStoryDto {
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<String>,
    pub country: Option<String>,
    pub status: String,
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RateStoryDto {
    pub score: i16,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RejectStoryDto {
    pub reason: Option<String>,
}
