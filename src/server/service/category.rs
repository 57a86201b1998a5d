use sea_orm::DatabaseConnection;

use crate::{
    model::category::{CreateCategoryDto, UpdateCategoryDto},
    server::{
        data::category::CategoryRepository,
        error::AppError,
        model::{
            category::{Category, CategoryWithCount, CreateCategoryParams, UpdateCategoryParams},
            Page,
        },
        util::slug::{candidate, slugify, MAX_SLUG_ATTEMPTS},
    },
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category with a derived slug. Names are unique.
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }

        if repo.name_exists(&name).await? {
            return Err(AppError::Conflict(format!(
                "Category '{}' already exists",
                name
            )));
        }

        let slug = self.unique_slug(&name, None).await?;

        let category = repo
            .create(CreateCategoryParams {
                name,
                slug,
                description: dto.description,
            })
            .await?;

        Ok(category)
    }

    /// Updates a category; a changed name re-derives the slug.
    pub async fn update(
        &self,
        id: i32,
        dto: UpdateCategoryDto,
    ) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }

        if name != existing.name && repo.name_exists(&name).await? {
            return Err(AppError::Conflict(format!(
                "Category '{}' already exists",
                name
            )));
        }

        let slug = if name != existing.name {
            self.unique_slug(&name, Some(&existing.slug)).await?
        } else {
            existing.slug.clone()
        };

        let updated = repo
            .update(UpdateCategoryParams {
                id,
                name,
                slug,
                description: dto.description,
            })
            .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }

    /// All categories for the public navigation menu.
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.find_by_slug(slug).await?)
    }

    /// Paginated categories with story counts for the admin listing.
    pub async fn get_paginated(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Page<CategoryWithCount>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let (items, total) = repo
            .get_all_with_counts_paginated(page.saturating_sub(1), limit)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }

    async fn unique_slug(&self, name: &str, current: Option<&str>) -> Result<String, AppError> {
        let repo = CategoryRepository::new(self.db);

        let base = slugify(name);
        if base.is_empty() {
            return Err(AppError::BadRequest(
                "Name must contain at least one letter or digit".to_string(),
            ));
        }

        for n in 0..=MAX_SLUG_ATTEMPTS {
            let slug = candidate(&base, n);

            if current == Some(slug.as_str()) {
                return Ok(slug);
            }
            if !repo.slug_exists(&slug).await? {
                return Ok(slug);
            }
        }

        Err(AppError::Conflict(format!(
            "Could not find a unique slug for '{}'",
            name
        )))
    }
}
