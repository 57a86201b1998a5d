//! Category domain models and parameters.

use crate::model::category::{CategoryDto, CategoryListItemDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
        }
    }
}

/// Category with the number of stories attached, for admin listings.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithCount {
    pub category: Category,
    pub story_count: u64,
}

impl CategoryWithCount {
    pub fn into_dto(self) -> CategoryListItemDto {
        CategoryListItemDto {
            id: self.category.id,
            name: self.category.name,
            slug: self.category.slug,
            description: self.category.description,
            story_count: self.story_count,
        }
    }
}

/// Parameters for creating a category. The slug is derived from the name by
/// the service before the repository insert.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// Parameters for updating a category's name and description.
#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}
