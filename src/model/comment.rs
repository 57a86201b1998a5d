use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
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

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub content: String,
    pub story_id: Option<i32>,
    pub chapter_id: Option<i32>,
    pub parent_id: Option<i32>,
}
