//! Chapter factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ChapterFactory<'a> {
    db: &'a DatabaseConnection,
    story_id: i32,
    uploader_id: i32,
    title: String,
    slug: String,
    content: String,
    sort_order: i32,
    is_published: bool,
}

impl<'a> ChapterFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, story_id: i32, uploader_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            story_id,
            uploader_id,
            title: format!("Chapter {}", id),
            slug: format!("chapter-{}", id),
            content: "<p>Test content</p>".to_string(),
            sort_order: 1,
            is_published: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub async fn build(self) -> Result<entity::chapter::Model, DbErr> {
        let now = Utc::now();
        entity::chapter::ActiveModel {
            story_id: ActiveValue::Set(self.story_id),
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            content: ActiveValue::Set(self.content),
            sort_order: ActiveValue::Set(self.sort_order),
            uploader_id: ActiveValue::Set(self.uploader_id),
            word_count: ActiveValue::Set(2),
            reading_time: ActiveValue::Set(1),
            view_count: ActiveValue::Set(0),
            is_published: ActiveValue::Set(self.is_published),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_chapter(
    db: &DatabaseConnection,
    story_id: i32,
    uploader_id: i32,
) -> Result<entity::chapter::Model, DbErr> {
    ChapterFactory::new(db, story_id, uploader_id).build().await
}
