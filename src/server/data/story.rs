//! Story data repository.
//!
//! Stories carry denormalized counters (views, likes, follows, rating) that
//! are adjusted with single-expression updates so concurrent requests cannot
//! lose increments to read-modify-write races.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::story::{
    CreateStoryParams, SortOrder, StoryFilter, StoryListItem, StorySort, UpdateStoryParams,
};

pub struct StoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new story and its category associations.
    pub async fn create(&self, params: CreateStoryParams) -> Result<entity::story::Model, DbErr> {
        let now = Utc::now();

        let story = entity::story::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
            cover_image: ActiveValue::Set(params.cover_image),
            author_id: ActiveValue::Set(params.author_id),
            author_name: ActiveValue::Set(params.author_name),
            status: ActiveValue::Set(entity::story::StoryStatus::Draft),
            is_published: ActiveValue::Set(false),
            is_recommended: ActiveValue::Set(false),
            tags: ActiveValue::Set(params.tags),
            country: ActiveValue::Set(params.country),
            view_count: ActiveValue::Set(0),
            like_count: ActiveValue::Set(0),
            follow_count: ActiveValue::Set(0),
            rating: ActiveValue::Set(0.0),
            rating_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for category_id in params.category_ids {
            entity::story_category::ActiveModel {
                story_id: ActiveValue::Set(story.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(story)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::story::Model>, DbErr> {
        entity::prelude::Story::find_by_id(id).one(self.db).await
    }

    /// Gets a story with its categories resolved.
    pub async fn find_by_id_with_categories(
        &self,
        id: i32,
    ) -> Result<Option<(entity::story::Model, Vec<entity::category::Model>)>, DbErr> {
        let Some(story) = entity::prelude::Story::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let categories = self.categories_for(&story).await?;

        Ok(Some((story, categories)))
    }

    pub async fn find_by_slug_with_categories(
        &self,
        slug: &str,
    ) -> Result<Option<(entity::story::Model, Vec<entity::category::Model>)>, DbErr> {
        let Some(story) = entity::prelude::Story::find()
            .filter(entity::story::Column::Slug.eq(slug))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let categories = self.categories_for(&story).await?;

        Ok(Some((story, categories)))
    }

    async fn categories_for(
        &self,
        story: &entity::story::Model,
    ) -> Result<Vec<entity::category::Model>, DbErr> {
        story
            .find_related(entity::prelude::Category)
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    /// Exact-match probe used by slug disambiguation.
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Story::find()
            .filter(entity::story::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets paginated stories with chapter counts, applying the filter's
    /// search/status/category constraints and sort order.
    pub async fn get_paginated(
        &self,
        filter: &StoryFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<StoryListItem>, u64), DbErr> {
        let mut query = entity::prelude::Story::find();

        if filter.published_only {
            query = query.filter(entity::story::Column::IsPublished.eq(true));
        }

        if let Some(author_id) = filter.author_id {
            query = query.filter(entity::story::Column::AuthorId.eq(author_id));
        }

        if let Some(status) = &filter.status {
            query = query.filter(entity::story::Column::Status.eq(status.clone()));
        }

        if let Some(term) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::story::Column::Title.contains(term))
                    .add(entity::story::Column::AuthorName.contains(term)),
            );
        }

        if let Some(category_id) = filter.category_id {
            let story_ids: Vec<i32> = entity::prelude::StoryCategory::find()
                .filter(entity::story_category::Column::CategoryId.eq(category_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|sc| sc.story_id)
                .collect();

            query = query.filter(entity::story::Column::Id.is_in(story_ids));
        }

        let query = Self::apply_sort(query, filter.sort_by, filter.sort_order);

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let stories = paginator.fetch_page(page).await?;

        let mut results = Vec::new();
        for story in stories {
            let chapter_count = entity::prelude::Chapter::find()
                .filter(entity::chapter::Column::StoryId.eq(story.id))
                .count(self.db)
                .await?;

            results.push(StoryListItem::from_entity(story, chapter_count));
        }

        Ok((results, total))
    }

    fn apply_sort(
        query: Select<entity::prelude::Story>,
        sort_by: StorySort,
        sort_order: SortOrder,
    ) -> Select<entity::prelude::Story> {
        let column = match sort_by {
            StorySort::CreatedAt => entity::story::Column::CreatedAt,
            StorySort::UpdatedAt => entity::story::Column::UpdatedAt,
            StorySort::ViewCount => entity::story::Column::ViewCount,
            StorySort::Rating => entity::story::Column::Rating,
            StorySort::Title => entity::story::Column::Title,
        };

        match sort_order {
            SortOrder::Asc => query.order_by_asc(column),
            SortOrder::Desc => query.order_by_desc(column),
        }
    }

    /// Updates a story and replaces its category associations.
    pub async fn update(
        &self,
        params: UpdateStoryParams,
    ) -> Result<Option<entity::story::Model>, DbErr> {
        let Some(story) = entity::prelude::Story::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::story::ActiveModel = story.into();
        active.title = ActiveValue::Set(params.title);
        if let Some(slug) = params.slug {
            active.slug = ActiveValue::Set(slug);
        }
        active.description = ActiveValue::Set(params.description);
        active.cover_image = ActiveValue::Set(params.cover_image);
        active.tags = ActiveValue::Set(params.tags);
        active.country = ActiveValue::Set(params.country);
        active.status = ActiveValue::Set(params.status);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        entity::prelude::StoryCategory::delete_many()
            .filter(entity::story_category::Column::StoryId.eq(params.id))
            .exec(self.db)
            .await?;

        for category_id in params.category_ids {
            entity::story_category::ActiveModel {
                story_id: ActiveValue::Set(params.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(Some(updated))
    }

    /// Deletes a story. Chapters, comments, and join rows cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Story::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Bumps the view counter in a single update expression.
    pub async fn increment_view(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Story::update_many()
            .filter(entity::story::Column::Id.eq(id))
            .col_expr(
                entity::story::Column::ViewCount,
                sea_orm::sea_query::Expr::col(entity::story::Column::ViewCount).add(1),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Adjusts the denormalized like counter by `delta` (+1 / -1).
    pub async fn adjust_like_count(&self, id: i32, delta: i64) -> Result<(), DbErr> {
        entity::prelude::Story::update_many()
            .filter(entity::story::Column::Id.eq(id))
            .col_expr(
                entity::story::Column::LikeCount,
                sea_orm::sea_query::Expr::col(entity::story::Column::LikeCount).add(delta),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Adjusts the denormalized follow counter by `delta` (+1 / -1).
    pub async fn adjust_follow_count(&self, id: i32, delta: i64) -> Result<(), DbErr> {
        entity::prelude::Story::update_many()
            .filter(entity::story::Column::Id.eq(id))
            .col_expr(
                entity::story::Column::FollowCount,
                sea_orm::sea_query::Expr::col(entity::story::Column::FollowCount).add(delta),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores a recomputed rating aggregate.
    pub async fn set_rating(&self, id: i32, rating: f64, rating_count: i32) -> Result<(), DbErr> {
        entity::prelude::Story::update_many()
            .filter(entity::story::Column::Id.eq(id))
            .col_expr(
                entity::story::Column::Rating,
                sea_orm::sea_query::Expr::value(rating),
            )
            .col_expr(
                entity::story::Column::RatingCount,
                sea_orm::sea_query::Expr::value(rating_count),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Moderation: publishes or unpublishes a story together with its status.
    pub async fn set_published(
        &self,
        id: i32,
        is_published: bool,
        status: entity::story::StoryStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Story::update_many()
            .filter(entity::story::Column::Id.eq(id))
            .col_expr(
                entity::story::Column::IsPublished,
                sea_orm::sea_query::Expr::value(is_published),
            )
            .col_expr(
                entity::story::Column::Status,
                sea_orm::sea_query::Expr::value(status),
            )
            .col_expr(
                entity::story::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn set_recommended(&self, id: i32, is_recommended: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Story::update_many()
            .filter(entity::story::Column::Id.eq(id))
            .col_expr(
                entity::story::Column::IsRecommended,
                sea_orm::sea_query::Expr::value(is_recommended),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
