//! Comment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    story_id: Option<i32>,
    chapter_id: Option<i32>,
    parent_id: Option<i32>,
    content: String,
    is_deleted: bool,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            story_id: None,
            chapter_id: None,
            parent_id: None,
            content: "Test comment".to_string(),
            is_deleted: false,
        }
    }

    pub fn story(mut self, story_id: i32) -> Self {
        self.story_id = Some(story_id);
        self
    }

    pub fn chapter(mut self, chapter_id: i32) -> Self {
        self.chapter_id = Some(chapter_id);
        self
    }

    pub fn parent(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            content: ActiveValue::Set(self.content),
            user_id: ActiveValue::Set(self.user_id),
            story_id: ActiveValue::Set(self.story_id),
            chapter_id: ActiveValue::Set(self.chapter_id),
            parent_id: ActiveValue::Set(self.parent_id),
            is_deleted: ActiveValue::Set(self.is_deleted),
            reply_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
