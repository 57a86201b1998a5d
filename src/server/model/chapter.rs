//! Chapter domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::chapter::{ChapterContentDto, ChapterDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: i32,
    pub story_id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub sort_order: i32,
    pub uploader_id: i32,
    pub word_count: i32,
    pub reading_time: i32,
    pub view_count: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chapter {
    pub fn from_entity(entity: entity::chapter::Model) -> Self {
        Self {
            id: entity.id,
            story_id: entity.story_id,
            title: entity.title,
            slug: entity.slug,
            content: entity.content,
            sort_order: entity.sort_order,
            uploader_id: entity.uploader_id,
            word_count: entity.word_count,
            reading_time: entity.reading_time,
            view_count: entity.view_count,
            is_published: entity.is_published,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Chapter listing entry; the content body stays out of list responses.
    pub fn into_dto(self) -> ChapterDto {
        ChapterDto {
            id: self.id,
            story_id: self.story_id,
            title: self.title,
            slug: self.slug,
            sort_order: self.sort_order,
            word_count: self.word_count,
            reading_time: self.reading_time,
            view_count: self.view_count,
            is_published: self.is_published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Reading view with the full content body.
    pub fn into_content_dto(self) -> ChapterContentDto {
        ChapterContentDto {
            id: self.id,
            story_id: self.story_id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            sort_order: self.sort_order,
            word_count: self.word_count,
            reading_time: self.reading_time,
            view_count: self.view_count,
            is_published: self.is_published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a chapter. Slug, sort order, and the derived
/// word-count fields are computed by the service.
#[derive(Debug, Clone)]
pub struct CreateChapterParams {
    pub story_id: i32,
    pub uploader_id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub sort_order: i32,
    pub word_count: i32,
    pub reading_time: i32,
    pub is_published: bool,
}

/// Parameters for updating a chapter. `slug` is Some only when the title
/// changed.
#[derive(Debug, Clone)]
pub struct UpdateChapterParams {
    pub id: i32,
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub word_count: i32,
    pub reading_time: i32,
    pub is_published: bool,
}
