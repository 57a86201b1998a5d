use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// Category with the number of stories attached, for admin listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryListItemDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub story_count: u64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCategoryDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCategoryDto {
    pub name: String,
    pub description: Option<String>,
}
