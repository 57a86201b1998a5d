use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::page::{CreatePageParams, StaticPage, UpdatePageParams};

pub struct PageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePageParams) -> Result<StaticPage, DbErr> {
        let now = Utc::now();

        let entity = entity::page::ActiveModel {
            slug: ActiveValue::Set(params.slug),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            content: ActiveValue::Set(params.content),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StaticPage::from_entity(entity))
    }

    /// Creates a page or refreshes the one already holding the slug. Used by
    /// the seeder so repeated runs stay idempotent.
    pub async fn upsert_by_slug(&self, params: CreatePageParams) -> Result<StaticPage, DbErr> {
        let existing = entity::prelude::Page::find()
            .filter(entity::page::Column::Slug.eq(&params.slug))
            .one(self.db)
            .await?;

        match existing {
            Some(page) => {
                let mut active: entity::page::ActiveModel = page.into();
                active.title = ActiveValue::Set(params.title);
                active.description = ActiveValue::Set(params.description);
                active.content = ActiveValue::Set(params.content);
                active.is_active = ActiveValue::Set(params.is_active);
                active.updated_at = ActiveValue::Set(Utc::now());
                let updated = active.update(self.db).await?;
                Ok(StaticPage::from_entity(updated))
            }
            None => self.create(params).await,
        }
    }

    /// Public lookup: only active pages are visible to readers.
    pub async fn find_active_by_slug(&self, slug: &str) -> Result<Option<StaticPage>, DbErr> {
        let entity = entity::prelude::Page::find()
            .filter(entity::page::Column::Slug.eq(slug))
            .filter(entity::page::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(StaticPage::from_entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<StaticPage>, DbErr> {
        let entity = entity::prelude::Page::find_by_id(id).one(self.db).await?;

        Ok(entity.map(StaticPage::from_entity))
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Page::find()
            .filter(entity::page::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<StaticPage>, u64), DbErr> {
        let paginator = entity::prelude::Page::find()
            .order_by_asc(entity::page::Column::Title)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let pages = entities.into_iter().map(StaticPage::from_entity).collect();

        Ok((pages, total))
    }

    pub async fn update(&self, params: UpdatePageParams) -> Result<Option<StaticPage>, DbErr> {
        let Some(page) = entity::prelude::Page::find_by_id(params.id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::page::ActiveModel = page.into();
        active.title = ActiveValue::Set(params.title);
        active.description = ActiveValue::Set(params.description);
        active.content = ActiveValue::Set(params.content);
        active.is_active = ActiveValue::Set(params.is_active);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(StaticPage::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Page::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
