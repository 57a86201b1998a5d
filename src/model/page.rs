use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePageDto {
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePageDto {
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
