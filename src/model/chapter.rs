use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChapterDto {
    pub id: i32,
    pub story_id: i32,
    pub title: String,
    pub slug: String,
    pub sort_order: i32,
    pub word_count: i32,
    pub reading_time: i32,
    pub view_count: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reading view: chapter metadata plus the full content body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChapterContentDto {
    pub id: i32,
    pub story_id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub sort_order: i32,
    pub word_count: i32,
    pub reading_time: i32,
    pub view_count: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateChapterDto {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateChapterDto {
    pub title: String,
    pub content: String,
    pub is_published: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReorderChapterDto {
    pub sort_order: i32,
}
