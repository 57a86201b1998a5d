//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

/// Comment enriched with the commenting user's public name and avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub username: String,
    pub user_avatar: Option<String>,
    pub story_id: Option<i32>,
    pub chapter_id: Option<i32>,
    pub parent_id: Option<i32>,
    pub is_deleted: bool,
    pub reply_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(
        entity: entity::comment::Model,
        user: Option<entity::user::Model>,
    ) -> Self {
        let (username, user_avatar) = match user {
            Some(user) => (
                user.display_name.unwrap_or(user.username),
                user.avatar,
            ),
            None => (format!("User {}", entity.user_id), None),
        };

        Self {
            id: entity.id,
            content: entity.content,
            user_id: entity.user_id,
            username,
            user_avatar,
            story_id: entity.story_id,
            chapter_id: entity.chapter_id,
            parent_id: entity.parent_id,
            is_deleted: entity.is_deleted,
            reply_count: entity.reply_count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        // Soft-deleted comments keep their slot in the thread but lose their
        // text.
        let content = if self.is_deleted {
            String::new()
        } else {
            self.content
        };

        CommentDto {
            id: self.id,
            content,
            user_id: self.user_id,
            username: self.username,
            user_avatar: self.user_avatar,
            story_id: self.story_id,
            chapter_id: self.chapter_id,
            parent_id: self.parent_id,
            is_deleted: self.is_deleted,
            reply_count: self.reply_count,
            created_at: self.created_at,
        }
    }
}

/// Parameters for posting a comment. Exactly one of `story_id`/`chapter_id`
/// is set; the service validates the target before the insert.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub user_id: i32,
    pub content: String,
    pub story_id: Option<i32>,
    pub chapter_id: Option<i32>,
    pub parent_id: Option<i32>,
}
