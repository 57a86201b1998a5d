//! Administrative moderation, including the server-side batch operations.
//!
//! Batch requests process each id independently and report a per-item
//! outcome. There is deliberately no rollback across a batch: a failed item
//! leaves the already-processed ones applied, and the response says exactly
//! which ones those were.

use entity::story::StoryStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::admin::BatchItemResultDto,
    server::{
        data::{
            chapter::ChapterRepository, comment::CommentRepository, story::StoryRepository,
            user::UserRepository,
        },
        error::AppError,
        model::story::Story,
        service::email::EmailService,
    },
};

/// Entity family a batch request operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchTarget {
    Stories,
    Chapters,
    Comments,
    Users,
}

pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a story and notifies its author.
    ///
    /// The notification is best-effort; the approval stands even when the
    /// email cannot be delivered.
    pub async fn approve_story(
        &self,
        id: i32,
        mailer: &EmailService,
    ) -> Result<Option<Story>, AppError> {
        let stories = StoryRepository::new(self.db);

        if !stories.set_published(id, true, StoryStatus::Published).await? {
            return Ok(None);
        }

        let story = self.notify_author(id, mailer, None, true).await?;

        Ok(story)
    }

    /// Sends a story back to draft and notifies its author with the reason.
    pub async fn reject_story(
        &self,
        id: i32,
        reason: Option<&str>,
        mailer: &EmailService,
    ) -> Result<Option<Story>, AppError> {
        let stories = StoryRepository::new(self.db);

        if !stories.set_published(id, false, StoryStatus::Draft).await? {
            return Ok(None);
        }

        let story = self.notify_author(id, mailer, reason, false).await?;

        Ok(story)
    }

    pub async fn set_story_recommended(
        &self,
        id: i32,
        is_recommended: bool,
    ) -> Result<bool, AppError> {
        let stories = StoryRepository::new(self.db);

        Ok(stories.set_recommended(id, is_recommended).await?)
    }

    pub async fn set_chapter_published(
        &self,
        id: i32,
        is_published: bool,
    ) -> Result<bool, AppError> {
        let chapters = ChapterRepository::new(self.db);

        Ok(chapters.set_published(id, is_published).await?)
    }

    /// Applies `action` to every id independently and reports one outcome
    /// per id, in request order.
    pub async fn batch(
        &self,
        target: BatchTarget,
        action: &str,
        ids: &[i32],
        mailer: &EmailService,
    ) -> Result<Vec<BatchItemResultDto>, AppError> {
        if !Self::action_supported(target, action) {
            return Err(AppError::BadRequest(format!(
                "Unknown batch action '{}'",
                action
            )));
        }

        let mut results = Vec::with_capacity(ids.len());

        for &id in ids {
            let outcome = self.apply(target, action, id, mailer).await;

            results.push(match outcome {
                Ok(true) => BatchItemResultDto {
                    id,
                    ok: true,
                    error: None,
                },
                Ok(false) => BatchItemResultDto {
                    id,
                    ok: false,
                    error: Some("Not found".to_string()),
                },
                Err(e) => BatchItemResultDto {
                    id,
                    ok: false,
                    error: Some(e.to_string()),
                },
            });
        }

        Ok(results)
    }

    fn action_supported(target: BatchTarget, action: &str) -> bool {
        let supported: &[&str] = match target {
            BatchTarget::Stories => &["approve", "reject", "recommend", "unrecommend", "delete"],
            BatchTarget::Chapters => &["publish", "unpublish", "delete"],
            BatchTarget::Comments => &["delete", "restore"],
            BatchTarget::Users => &["activate", "deactivate"],
        };

        supported.contains(&action)
    }

    async fn apply(
        &self,
        target: BatchTarget,
        action: &str,
        id: i32,
        mailer: &EmailService,
    ) -> Result<bool, AppError> {
        match (target, action) {
            (BatchTarget::Stories, "approve") => {
                Ok(self.approve_story(id, mailer).await?.is_some())
            }
            (BatchTarget::Stories, "reject") => {
                Ok(self.reject_story(id, None, mailer).await?.is_some())
            }
            (BatchTarget::Stories, "recommend") => self.set_story_recommended(id, true).await,
            (BatchTarget::Stories, "unrecommend") => self.set_story_recommended(id, false).await,
            (BatchTarget::Stories, "delete") => {
                Ok(StoryRepository::new(self.db).delete(id).await?)
            }
            (BatchTarget::Chapters, "publish") => self.set_chapter_published(id, true).await,
            (BatchTarget::Chapters, "unpublish") => self.set_chapter_published(id, false).await,
            (BatchTarget::Chapters, "delete") => {
                Ok(ChapterRepository::new(self.db).delete(id).await?)
            }
            (BatchTarget::Comments, "delete") => {
                Ok(CommentRepository::new(self.db).soft_delete(id).await?)
            }
            (BatchTarget::Comments, "restore") => {
                Ok(CommentRepository::new(self.db).restore(id).await?)
            }
            (BatchTarget::Users, "activate") => {
                Ok(UserRepository::new(self.db).set_active(id, true).await?)
            }
            (BatchTarget::Users, "deactivate") => {
                Ok(UserRepository::new(self.db).set_active(id, false).await?)
            }
            _ => Err(AppError::BadRequest(format!(
                "Unknown batch action '{}'",
                action
            ))),
        }
    }

    /// Emails the author about a moderation decision and returns the story
    /// with its categories for the response body.
    async fn notify_author(
        &self,
        story_id: i32,
        mailer: &EmailService,
        reason: Option<&str>,
        approved: bool,
    ) -> Result<Option<Story>, AppError> {
        let stories = StoryRepository::new(self.db);
        let users = UserRepository::new(self.db);

        let Some((story, categories)) = stories.find_by_id_with_categories(story_id).await? else {
            return Ok(None);
        };

        if let Some(author) = users.find_by_id(story.author_id).await? {
            if approved {
                mailer
                    .send_story_approved(
                        &author.email,
                        author.public_name(),
                        &story.title,
                        &story.slug,
                    )
                    .await;
            } else {
                mailer
                    .send_story_rejected(&author.email, author.public_name(), &story.title, reason)
                    .await;
            }
        }

        Ok(Some(Story::from_entity(story, categories)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::email::EmailService;
    use test_utils::{builder::TestBuilder, factory};

    fn mailer() -> EmailService {
        EmailService::console("https://hungyeu.example")
    }

    #[tokio::test]
    async fn approval_publishes_story() {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let author = factory::user::create_author(db).await.unwrap();
        let story = factory::story::create_story(db, author.id).await.unwrap();

        let service = ModerationService::new(db);
        let approved = service
            .approve_story(story.id, &mailer())
            .await
            .unwrap()
            .unwrap();

        assert!(approved.is_published);
        assert_eq!(approved.status, entity::story::StoryStatus::Published);
    }

    #[tokio::test]
    async fn rejection_returns_story_to_draft() {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let author = factory::user::create_author(db).await.unwrap();
        let story = factory::story::StoryFactory::new(db, author.id)
            .published(true)
            .status(entity::story::StoryStatus::Published)
            .build()
            .await
            .unwrap();

        let service = ModerationService::new(db);
        let rejected = service
            .reject_story(story.id, Some("Chưa đạt"), &mailer())
            .await
            .unwrap()
            .unwrap();

        assert!(!rejected.is_published);
        assert_eq!(rejected.status, entity::story::StoryStatus::Draft);
    }

    #[tokio::test]
    async fn batch_reports_one_outcome_per_id() {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let author = factory::user::create_author(db).await.unwrap();
        let story_a = factory::story::create_story(db, author.id).await.unwrap();
        let story_b = factory::story::create_story(db, author.id).await.unwrap();

        let service = ModerationService::new(db);
        let results = service
            .batch(
                BatchTarget::Stories,
                "approve",
                &[story_a.id, 9999, story_b.id],
                &mailer(),
            )
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert!(results[0].ok);
        assert!(!results[1].ok);
        assert_eq!(results[1].error.as_deref(), Some("Not found"));
        assert!(results[2].ok);

        // The failing middle item did not roll back its neighbors.
        let repo = StoryRepository::new(db);
        assert!(repo.find_by_id(story_a.id).await.unwrap().unwrap().is_published);
        assert!(repo.find_by_id(story_b.id).await.unwrap().unwrap().is_published);
    }

    #[tokio::test]
    async fn batch_rejects_unknown_actions() {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ModerationService::new(db);
        let result = service
            .batch(BatchTarget::Stories, "explode", &[1], &mailer())
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn user_batch_toggles_activation() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await.unwrap();

        let service = ModerationService::new(db);
        let results = service
            .batch(BatchTarget::Users, "deactivate", &[user.id], &mailer())
            .await
            .unwrap();

        assert!(results[0].ok);
        assert!(
            !UserRepository::new(db)
                .find_by_id(user.id)
                .await
                .unwrap()
                .unwrap()
                .is_active
        );
    }
}
