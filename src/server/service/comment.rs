use sea_orm::DatabaseConnection;

use crate::{
    model::comment::CreateCommentDto,
    server::{
        data::{chapter::ChapterRepository, comment::CommentRepository, story::StoryRepository},
        error::{auth::AuthError, AppError},
        model::{
            comment::{Comment, CreateCommentParams},
            user::User,
            Page,
        },
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a comment on a story or a chapter, optionally as a reply.
    ///
    /// Exactly one target must be given, the target must exist, and a reply
    /// must point at a live comment on the same target.
    pub async fn create(&self, user: &User, dto: CreateCommentDto) -> Result<Comment, AppError> {
        let comments = CommentRepository::new(self.db);

        let content = dto.content.trim().to_string();
        if content.is_empty() {
            return Err(AppError::BadRequest(
                "Comment must not be empty".to_string(),
            ));
        }

        match (dto.story_id, dto.chapter_id) {
            (Some(story_id), None) => {
                if StoryRepository::new(self.db).find_by_id(story_id).await?.is_none() {
                    return Err(AppError::NotFound("Story not found".to_string()));
                }
            }
            (None, Some(chapter_id)) => {
                if ChapterRepository::new(self.db)
                    .find_by_id(chapter_id)
                    .await?
                    .is_none()
                {
                    return Err(AppError::NotFound("Chapter not found".to_string()));
                }
            }
            _ => {
                return Err(AppError::BadRequest(
                    "A comment targets exactly one story or chapter".to_string(),
                ));
            }
        }

        if let Some(parent_id) = dto.parent_id {
            let Some(parent) = comments.find_by_id(parent_id).await? else {
                return Err(AppError::NotFound("Parent comment not found".to_string()));
            };
            if parent.is_deleted {
                return Err(AppError::BadRequest(
                    "Cannot reply to a deleted comment".to_string(),
                ));
            }
            if parent.story_id != dto.story_id || parent.chapter_id != dto.chapter_id {
                return Err(AppError::BadRequest(
                    "Reply target does not match the parent comment".to_string(),
                ));
            }
        }

        let comment = comments
            .create(CreateCommentParams {
                user_id: user.id,
                content,
                story_id: dto.story_id,
                chapter_id: dto.chapter_id,
                parent_id: dto.parent_id,
            })
            .await?;

        Ok(comment)
    }

    /// Soft-deletes a comment. Owners may delete their own; admins any.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<bool, AppError> {
        let comments = CommentRepository::new(self.db);

        let Some(comment) = comments.find_by_id(id).await? else {
            return Ok(false);
        };

        if !actor.is_admin() && comment.user_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Comment belongs to another user".to_string(),
            )
            .into());
        }

        Ok(comments.soft_delete(id).await?)
    }

    /// Admin: reverses a soft deletion.
    pub async fn restore(&self, id: i32) -> Result<bool, AppError> {
        let comments = CommentRepository::new(self.db);

        Ok(comments.restore(id).await?)
    }

    pub async fn get_for_story(
        &self,
        story_id: i32,
        page: u64,
        limit: u64,
    ) -> Result<Page<Comment>, AppError> {
        let comments = CommentRepository::new(self.db);

        let (items, total) = comments
            .get_for_story(story_id, page.saturating_sub(1), limit)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }

    pub async fn get_for_chapter(
        &self,
        chapter_id: i32,
        page: u64,
        limit: u64,
    ) -> Result<Page<Comment>, AppError> {
        let comments = CommentRepository::new(self.db);

        let (items, total) = comments
            .get_for_chapter(chapter_id, page.saturating_sub(1), limit)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }

    pub async fn get_replies(
        &self,
        parent_id: i32,
        page: u64,
        limit: u64,
    ) -> Result<Page<Comment>, AppError> {
        let comments = CommentRepository::new(self.db);

        let (items, total) = comments
            .get_replies(parent_id, page.saturating_sub(1), limit)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }

    /// Admin moderation list, deleted comments included.
    pub async fn get_all(&self, page: u64, limit: u64) -> Result<Page<Comment>, AppError> {
        let comments = CommentRepository::new(self.db);

        let (items, total) = comments
            .get_all_paginated(page.saturating_sub(1), limit)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }
}
