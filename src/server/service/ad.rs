use sea_orm::DatabaseConnection;

use crate::{
    model::ad::{CreateAdDto, UpdateAdDto},
    server::{
        data::ad::AdRepository,
        error::AppError,
        model::{
            ad::{str_to_ad_type, Ad, CreateAdParams, UpdateAdParams},
            Page,
        },
    },
};

pub struct AdService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active ads for reading pages, optionally narrowed by type and slot.
    pub async fn get_active(
        &self,
        ad_type: Option<&str>,
        position: Option<&str>,
    ) -> Result<Vec<Ad>, AppError> {
        let repo = AdRepository::new(self.db);

        let ad_type = match ad_type {
            Some(raw) => Some(
                str_to_ad_type(raw)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown ad type '{}'", raw)))?,
            ),
            None => None,
        };

        Ok(repo.get_active(ad_type, position).await?)
    }

    pub async fn create(&self, dto: CreateAdDto) -> Result<Ad, AppError> {
        let repo = AdRepository::new(self.db);

        let ad_type = str_to_ad_type(&dto.ad_type)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown ad type '{}'", dto.ad_type)))?;

        if dto.image_url.trim().is_empty() || dto.link_url.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Image and link URLs must not be empty".to_string(),
            ));
        }

        let ad = repo
            .create(CreateAdParams {
                ad_type,
                position: dto.position,
                image_url: dto.image_url,
                link_url: dto.link_url,
                title: dto.title,
                is_active: dto.is_active,
            })
            .await?;

        Ok(ad)
    }

    pub async fn update(&self, id: i32, dto: UpdateAdDto) -> Result<Option<Ad>, AppError> {
        let repo = AdRepository::new(self.db);

        let ad_type = str_to_ad_type(&dto.ad_type)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown ad type '{}'", dto.ad_type)))?;

        let updated = repo
            .update(UpdateAdParams {
                id,
                ad_type,
                position: dto.position,
                image_url: dto.image_url,
                link_url: dto.link_url,
                title: dto.title,
                is_active: dto.is_active,
            })
            .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = AdRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }

    pub async fn get_paginated(&self, page: u64, limit: u64) -> Result<Page<Ad>, AppError> {
        let repo = AdRepository::new(self.db);

        let (items, total) = repo
            .get_all_paginated(page.saturating_sub(1), limit)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }
}
