//! Static page factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PageFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    title: String,
    content: String,
    is_active: bool,
}

impl<'a> PageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("page-{}", id),
            title: format!("Page {}", id),
            content: "<p>Test page</p>".to_string(),
            is_active: true,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::page::Model, DbErr> {
        let now = Utc::now();
        entity::page::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            content: ActiveValue::Set(self.content),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
