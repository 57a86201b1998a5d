use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::chapter::{Chapter, CreateChapterParams, UpdateChapterParams};

pub struct ChapterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChapterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new chapter.
    pub async fn create(&self, params: CreateChapterParams) -> Result<Chapter, DbErr> {
        let now = Utc::now();

        let entity = entity::chapter::ActiveModel {
            story_id: ActiveValue::Set(params.story_id),
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(params.slug),
            content: ActiveValue::Set(params.content),
            sort_order: ActiveValue::Set(params.sort_order),
            uploader_id: ActiveValue::Set(params.uploader_id),
            word_count: ActiveValue::Set(params.word_count),
            reading_time: ActiveValue::Set(params.reading_time),
            view_count: ActiveValue::Set(0),
            is_published: ActiveValue::Set(params.is_published),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Chapter::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Chapter>, DbErr> {
        let entity = entity::prelude::Chapter::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Chapter::from_entity))
    }

    pub async fn find_by_slug(
        &self,
        story_id: i32,
        slug: &str,
    ) -> Result<Option<Chapter>, DbErr> {
        let entity = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::StoryId.eq(story_id))
            .filter(entity::chapter::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Chapter::from_entity))
    }

    /// Exact-match probe used by slug disambiguation. Scoped to one story;
    /// two stories may both have a "chuong-1".
    pub async fn slug_exists(&self, story_id: i32, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::StoryId.eq(story_id))
            .filter(entity::chapter::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Next free position at the end of the story's reading sequence.
    pub async fn next_sort_order(&self, story_id: i32) -> Result<i32, DbErr> {
        let last = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::StoryId.eq(story_id))
            .order_by_desc(entity::chapter::Column::SortOrder)
            .one(self.db)
            .await?;

        Ok(last.map(|c| c.sort_order + 1).unwrap_or(1))
    }

    /// Gets a story's chapters in reading order.
    pub async fn get_by_story(
        &self,
        story_id: i32,
        published_only: bool,
    ) -> Result<Vec<Chapter>, DbErr> {
        let mut query = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::StoryId.eq(story_id));

        if published_only {
            query = query.filter(entity::chapter::Column::IsPublished.eq(true));
        }

        let entities = query
            .order_by_asc(entity::chapter::Column::SortOrder)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Chapter::from_entity).collect())
    }

    /// Gets paginated chapters for the admin listing, newest first,
    /// optionally scoped to one story.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
        story_id: Option<i32>,
    ) -> Result<(Vec<Chapter>, u64), DbErr> {
        let mut query = entity::prelude::Chapter::find();

        if let Some(story_id) = story_id {
            query = query.filter(entity::chapter::Column::StoryId.eq(story_id));
        }

        let paginator = query
            .order_by_desc(entity::chapter::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let chapters = entities.into_iter().map(Chapter::from_entity).collect();

        Ok((chapters, total))
    }

    /// Updates a chapter's content and derived fields.
    pub async fn update(&self, params: UpdateChapterParams) -> Result<Option<Chapter>, DbErr> {
        let Some(chapter) = entity::prelude::Chapter::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::chapter::ActiveModel = chapter.into();
        active.title = ActiveValue::Set(params.title);
        if let Some(slug) = params.slug {
            active.slug = ActiveValue::Set(slug);
        }
        active.content = ActiveValue::Set(params.content);
        active.word_count = ActiveValue::Set(params.word_count);
        active.reading_time = ActiveValue::Set(params.reading_time);
        active.is_published = ActiveValue::Set(params.is_published);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Chapter::from_entity(updated)))
    }

    /// Moves a chapter to an explicit position in the reading sequence.
    pub async fn set_sort_order(&self, id: i32, sort_order: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Chapter::update_many()
            .filter(entity::chapter::Column::Id.eq(id))
            .col_expr(
                entity::chapter::Column::SortOrder,
                sea_orm::sea_query::Expr::value(sort_order),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn set_published(&self, id: i32, is_published: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Chapter::update_many()
            .filter(entity::chapter::Column::Id.eq(id))
            .col_expr(
                entity::chapter::Column::IsPublished,
                sea_orm::sea_query::Expr::value(is_published),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Chapter::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Bumps the view counter in a single update expression.
    pub async fn increment_view(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Chapter::update_many()
            .filter(entity::chapter::Column::Id.eq(id))
            .col_expr(
                entity::chapter::Column::ViewCount,
                sea_orm::sea_query::Expr::col(entity::chapter::Column::ViewCount).add(1),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
