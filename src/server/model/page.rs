//! Static page domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::page::PageDto;

#[derive(Debug, Clone, PartialEq)]
pub struct StaticPage {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StaticPage {
    pub fn from_entity(entity: entity::page::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            description: entity.description,
            content: entity.content,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PageDto {
        PageDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            description: self.description,
            content: self.content,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePageParams {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct UpdatePageParams {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub is_active: bool,
}
