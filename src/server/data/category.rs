use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::category::{
    Category, CategoryWithCount, CreateCategoryParams, UpdateCategoryParams,
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new category.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Creates a category or updates the description of the one already
    /// holding the name. Used by the seeder so repeated runs stay idempotent.
    pub async fn upsert_by_name(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let existing = entity::prelude::Category::find()
            .filter(entity::category::Column::Name.eq(&params.name))
            .one(self.db)
            .await?;

        match existing {
            Some(category) => {
                let mut active: entity::category::ActiveModel = category.into();
                active.description = ActiveValue::Set(params.description);
                let updated = active.update(self.db).await?;
                Ok(Category::from_entity(updated))
            }
            None => self.create(params).await,
        }
    }

    /// Gets all categories ordered by name, for the public category menu.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Gets paginated categories with their story counts for admin listings.
    pub async fn get_all_with_counts_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<CategoryWithCount>, u64), DbErr> {
        let paginator = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let categories = paginator.fetch_page(page).await?;

        let mut results = Vec::new();
        for category in categories {
            let story_count = entity::prelude::StoryCategory::find()
                .filter(entity::story_category::Column::CategoryId.eq(category.id))
                .count(self.db)
                .await?;

            results.push(CategoryWithCount {
                category: Category::from_entity(category),
                story_count,
            });
        }

        Ok((results, total))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Category::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find()
            .filter(entity::category::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Exact-match probe used by slug disambiguation.
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates a category's name, slug, and description.
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Option<Category>, DbErr> {
        let Some(category) = entity::prelude::Category::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = category.into();
        active.name = ActiveValue::Set(params.name);
        active.slug = ActiveValue::Set(params.slug);
        active.description = ActiveValue::Set(params.description);

        let updated = active.update(self.db).await?;

        Ok(Some(Category::from_entity(updated)))
    }

    /// Deletes a category. Join rows cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Category::find().count(self.db).await
    }
}
