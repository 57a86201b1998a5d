use sea_orm::DatabaseConnection;

use crate::{
    model::page::{CreatePageDto, UpdatePageDto},
    server::{
        data::page::PageRepository,
        error::AppError,
        model::{
            page::{CreatePageParams, StaticPage, UpdatePageParams},
            Page,
        },
        util::slug::{candidate, slugify, MAX_SLUG_ATTEMPTS},
    },
};

pub struct PageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Public lookup; only active pages are served.
    pub async fn get_active_by_slug(&self, slug: &str) -> Result<Option<StaticPage>, AppError> {
        let repo = PageRepository::new(self.db);

        Ok(repo.find_active_by_slug(slug).await?)
    }

    pub async fn create(&self, dto: CreatePageDto) -> Result<StaticPage, AppError> {
        let repo = PageRepository::new(self.db);

        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }

        let slug = self.unique_slug(&title).await?;

        let page = repo
            .create(CreatePageParams {
                slug,
                title,
                description: dto.description,
                content: dto.content,
                is_active: dto.is_active,
            })
            .await?;

        Ok(page)
    }

    /// Updates a page's content. The slug is part of published URLs and
    /// stays stable across edits.
    pub async fn update(&self, id: i32, dto: UpdatePageDto) -> Result<Option<StaticPage>, AppError> {
        let repo = PageRepository::new(self.db);

        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }

        let updated = repo
            .update(UpdatePageParams {
                id,
                title,
                description: dto.description,
                content: dto.content,
                is_active: dto.is_active,
            })
            .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PageRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }

    pub async fn get_paginated(&self, page: u64, limit: u64) -> Result<Page<StaticPage>, AppError> {
        let repo = PageRepository::new(self.db);

        let (items, total) = repo
            .get_all_paginated(page.saturating_sub(1), limit)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }

    async fn unique_slug(&self, title: &str) -> Result<String, AppError> {
        let repo = PageRepository::new(self.db);

        let base = slugify(title);
        if base.is_empty() {
            return Err(AppError::BadRequest(
                "Title must contain at least one letter or digit".to_string(),
            ));
        }

        for n in 0..=MAX_SLUG_ATTEMPTS {
            let slug = candidate(&base, n);
            if !repo.slug_exists(&slug).await? {
                return Ok(slug);
            }
        }

        Err(AppError::Conflict(format!(
            "Could not find a unique slug for '{}'",
            title
        )))
    }
}
