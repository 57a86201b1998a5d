use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::ad::{Ad, CreateAdParams, UpdateAdParams};

pub struct AdRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAdParams) -> Result<Ad, DbErr> {
        let entity = entity::ad::ActiveModel {
            ad_type: ActiveValue::Set(params.ad_type),
            position: ActiveValue::Set(params.position),
            image_url: ActiveValue::Set(params.image_url),
            link_url: ActiveValue::Set(params.link_url),
            title: ActiveValue::Set(params.title),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ad::from_entity(entity))
    }

    /// Active ads for reading pages, optionally narrowed by type and slot.
    pub async fn get_active(
        &self,
        ad_type: Option<entity::ad::AdType>,
        position: Option<&str>,
    ) -> Result<Vec<Ad>, DbErr> {
        let mut query = entity::prelude::Ad::find()
            .filter(entity::ad::Column::IsActive.eq(true));

        if let Some(ad_type) = ad_type {
            query = query.filter(entity::ad::Column::AdType.eq(ad_type));
        }

        if let Some(position) = position {
            query = query.filter(entity::ad::Column::Position.eq(position));
        }

        let entities = query
            .order_by_asc(entity::ad::Column::Position)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ad::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Ad>, DbErr> {
        let entity = entity::prelude::Ad::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Ad::from_entity))
    }

    pub async fn get_all_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Ad>, u64), DbErr> {
        let paginator = entity::prelude::Ad::find()
            .order_by_desc(entity::ad::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let ads = entities.into_iter().map(Ad::from_entity).collect();

        Ok((ads, total))
    }

    pub async fn update(&self, params: UpdateAdParams) -> Result<Option<Ad>, DbErr> {
        let Some(ad) = entity::prelude::Ad::find_by_id(params.id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::ad::ActiveModel = ad.into();
        active.ad_type = ActiveValue::Set(params.ad_type);
        active.position = ActiveValue::Set(params.position);
        active.image_url = ActiveValue::Set(params.image_url);
        active.link_url = ActiveValue::Set(params.link_url);
        active.title = ActiveValue::Set(params.title);
        active.is_active = ActiveValue::Set(params.is_active);

        let updated = active.update(self.db).await?;

        Ok(Some(Ad::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Ad::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
