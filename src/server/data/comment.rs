//! Comment data repository.
//!
//! Maintains the `reply_count` denormalization: creating a reply increments
//! its parent, soft-deleting one decrements it, restoring increments again.
//! Deletion never removes rows so threads keep their shape.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment and, for replies, bumps the parent's reply count.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let now = Utc::now();

        let entity = entity::comment::ActiveModel {
            content: ActiveValue::Set(params.content),
            user_id: ActiveValue::Set(params.user_id),
            story_id: ActiveValue::Set(params.story_id),
            chapter_id: ActiveValue::Set(params.chapter_id),
            parent_id: ActiveValue::Set(params.parent_id),
            is_deleted: ActiveValue::Set(false),
            reply_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if let Some(parent_id) = entity.parent_id {
            self.adjust_reply_count(parent_id, 1).await?;
        }

        let user = entity::prelude::User::find_by_id(entity.user_id)
            .one(self.db)
            .await?;

        Ok(Comment::from_entity(entity, user))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id).one(self.db).await
    }

    /// Gets paginated top-level comments for a story, newest first.
    ///
    /// Soft-deleted comments are included so the thread keeps its shape; the
    /// DTO conversion blanks their content.
    pub async fn get_for_story(
        &self,
        story_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Comment>, u64), DbErr> {
        self.get_page(
            entity::prelude::Comment::find()
                .filter(entity::comment::Column::StoryId.eq(story_id))
                .filter(entity::comment::Column::ParentId.is_null())
                .order_by_desc(entity::comment::Column::CreatedAt),
            page,
            per_page,
        )
        .await
    }

    /// Gets paginated top-level comments for a chapter, newest first.
    pub async fn get_for_chapter(
        &self,
        chapter_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Comment>, u64), DbErr> {
        self.get_page(
            entity::prelude::Comment::find()
                .filter(entity::comment::Column::ChapterId.eq(chapter_id))
                .filter(entity::comment::Column::ParentId.is_null())
                .order_by_desc(entity::comment::Column::CreatedAt),
            page,
            per_page,
        )
        .await
    }

    /// Gets paginated replies to a comment, oldest first.
    pub async fn get_replies(
        &self,
        parent_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Comment>, u64), DbErr> {
        self.get_page(
            entity::prelude::Comment::find()
                .filter(entity::comment::Column::ParentId.eq(parent_id))
                .order_by_asc(entity::comment::Column::CreatedAt),
            page,
            per_page,
        )
        .await
    }

    /// Gets all comments for the admin moderation screen, newest first,
    /// deleted ones included.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Comment>, u64), DbErr> {
        self.get_page(
            entity::prelude::Comment::find()
                .order_by_desc(entity::comment::Column::CreatedAt),
            page,
            per_page,
        )
        .await
    }

    async fn get_page(
        &self,
        query: sea_orm::Select<entity::prelude::Comment>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Comment>, u64), DbErr> {
        let paginator = query
            .find_also_related(entity::prelude::User)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        let comments = rows
            .into_iter()
            .map(|(comment, user)| Comment::from_entity(comment, user))
            .collect();

        Ok((comments, total))
    }

    /// Soft-deletes a comment. Returns false when the comment does not exist
    /// or is already deleted, so the parent counter is only touched once.
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(comment) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        if comment.is_deleted {
            return Ok(false);
        }

        let parent_id = comment.parent_id;

        let mut active: entity::comment::ActiveModel = comment.into();
        active.is_deleted = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        if let Some(parent_id) = parent_id {
            self.adjust_reply_count(parent_id, -1).await?;
        }

        Ok(true)
    }

    /// Reverses a soft deletion.
    pub async fn restore(&self, id: i32) -> Result<bool, DbErr> {
        let Some(comment) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        if !comment.is_deleted {
            return Ok(false);
        }

        let parent_id = comment.parent_id;

        let mut active: entity::comment::ActiveModel = comment.into();
        active.is_deleted = ActiveValue::Set(false);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        if let Some(parent_id) = parent_id {
            self.adjust_reply_count(parent_id, 1).await?;
        }

        Ok(true)
    }

    async fn adjust_reply_count(&self, id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(id))
            .col_expr(
                entity::comment::Column::ReplyCount,
                sea_orm::sea_query::Expr::col(entity::comment::Column::ReplyCount).add(delta),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
