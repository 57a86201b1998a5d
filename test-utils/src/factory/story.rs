//! Story factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct StoryFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    slug: String,
    author_name: String,
    status: entity::story::StoryStatus,
    is_published: bool,
    is_recommended: bool,
}

impl<'a> StoryFactory<'a> {
    /// Creates a new StoryFactory owned by `author_id`.
    ///
    /// Defaults: unique title/slug, draft status, unpublished.
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Story {}", id),
            slug: format!("story-{}", id),
            author_name: format!("Author {}", id),
            status: entity::story::StoryStatus::Draft,
            is_published: false,
            is_recommended: false,
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

    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = name.into();
        self
    }

    pub fn status(mut self, status: entity::story::StoryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub fn recommended(mut self, is_recommended: bool) -> Self {
        self.is_recommended = is_recommended;
        self
    }

    pub async fn build(self) -> Result<entity::story::Model, DbErr> {
        let now = Utc::now();
        entity::story::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(None),
            cover_image: ActiveValue::Set(None),
            author_id: ActiveValue::Set(self.author_id),
            author_name: ActiveValue::Set(self.author_name),
            status: ActiveValue::Set(self.status),
            is_published: ActiveValue::Set(self.is_published),
            is_recommended: ActiveValue::Set(self.is_recommended),
            tags: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            view_count: ActiveValue::Set(0),
            like_count: ActiveValue::Set(0),
            follow_count: ActiveValue::Set(0),
            rating: ActiveValue::Set(0.0),
            rating_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_story(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::story::Model, DbErr> {
    StoryFactory::new(db, author_id).build().await
}
