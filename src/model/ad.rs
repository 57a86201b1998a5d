use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdDto {
    pub id: i32,
    pub ad_type: String,
    pub position: String,
    pub image_url: String,
    pub link_url: String,
    pub title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAdDto {
    pub ad_type: String,
    pub position: String,
    pub image_url: String,
    pub link_url: String,
    pub title: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAdDto {
    pub ad_type: String,
    pub position: String,
    pub image_url: String,
    pub link_url: String,
    pub title: Option<String>,
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
