//! Chapter business logic: per-story slugs, reading order, and the derived
//! word-count and reading-time fields.

use sea_orm::DatabaseConnection;

use crate::{
    model::chapter::{CreateChapterDto, UpdateChapterDto},
    server::{
        data::{chapter::ChapterRepository, story::StoryRepository},
        error::{auth::AuthError, AppError},
        model::{
            chapter::{Chapter, CreateChapterParams, UpdateChapterParams},
            user::User,
        },
        util::{
            slug::{candidate, slugify, MAX_SLUG_ATTEMPTS},
            text,
        },
    },
};

pub struct ChapterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChapterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a chapter to a story the actor owns.
    ///
    /// The slug is unique within the story only, the position defaults to
    /// the end of the reading sequence, and word count and reading time are
    /// derived from the tag-stripped content.
    pub async fn create(
        &self,
        actor: &User,
        story_id: i32,
        dto: CreateChapterDto,
    ) -> Result<Chapter, AppError> {
        let stories = StoryRepository::new(self.db);
        let chapters = ChapterRepository::new(self.db);

        let Some(story) = stories.find_by_id(story_id).await? else {
            return Err(AppError::NotFound("Story not found".to_string()));
        };

        self.check_ownership(actor, story.author_id)?;

        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }

        let slug = self.unique_slug(story_id, &title, None).await?;
        let sort_order = chapters.next_sort_order(story_id).await?;
        let word_count = text::word_count(&dto.content);

        let chapter = chapters
            .create(CreateChapterParams {
                story_id,
                uploader_id: actor.id,
                title,
                slug,
                content: dto.content,
                sort_order,
                word_count,
                reading_time: text::reading_time(word_count),
                is_published: dto.is_published,
            })
            .await?;

        Ok(chapter)
    }

    /// Updates a chapter's content, re-deriving the counted fields. A
    /// changed title gets a fresh per-story slug.
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        dto: UpdateChapterDto,
    ) -> Result<Option<Chapter>, AppError> {
        let chapters = ChapterRepository::new(self.db);

        let Some(existing) = chapters.find_by_id(id).await? else {
            return Ok(None);
        };

        self.check_chapter_ownership(actor, &existing).await?;

        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }

        let slug = if title != existing.title {
            Some(
                self.unique_slug(existing.story_id, &title, Some(&existing.slug))
                    .await?,
            )
        } else {
            None
        };

        let word_count = text::word_count(&dto.content);

        let updated = chapters
            .update(UpdateChapterParams {
                id,
                title,
                slug,
                content: dto.content,
                word_count,
                reading_time: text::reading_time(word_count),
                is_published: dto.is_published,
            })
            .await?;

        Ok(updated)
    }

    /// Moves a chapter to an explicit position in the reading sequence.
    pub async fn reorder(&self, actor: &User, id: i32, sort_order: i32) -> Result<bool, AppError> {
        let chapters = ChapterRepository::new(self.db);

        let Some(existing) = chapters.find_by_id(id).await? else {
            return Ok(false);
        };

        self.check_chapter_ownership(actor, &existing).await?;

        if sort_order < 1 {
            return Err(AppError::BadRequest(
                "Sort order must be at least 1".to_string(),
            ));
        }

        Ok(chapters.set_sort_order(id, sort_order).await?)
    }

    pub async fn delete(&self, actor: &User, id: i32) -> Result<bool, AppError> {
        let chapters = ChapterRepository::new(self.db);

        let Some(existing) = chapters.find_by_id(id).await? else {
            return Ok(false);
        };

        self.check_chapter_ownership(actor, &existing).await?;

        Ok(chapters.delete(id).await?)
    }

    /// Chapter list for a story page. Owners and admins also see unpublished
    /// chapters.
    pub async fn list_for_story(
        &self,
        story_slug: &str,
        viewer: Option<&User>,
    ) -> Result<Option<Vec<Chapter>>, AppError> {
        let stories = StoryRepository::new(self.db);
        let chapters = ChapterRepository::new(self.db);

        let Some((story, _)) = stories.find_by_slug_with_categories(story_slug).await? else {
            return Ok(None);
        };

        let is_owner = viewer
            .map(|v| v.is_admin() || v.id == story.author_id)
            .unwrap_or(false);

        if !story.is_published && !is_owner {
            return Ok(None);
        }

        let list = chapters.get_by_story(story.id, !is_owner).await?;

        Ok(Some(list))
    }

    /// Reading endpoint: resolves a chapter by story and chapter slug and
    /// bumps its view counter on a public read.
    pub async fn read(
        &self,
        story_slug: &str,
        chapter_slug: &str,
        viewer: Option<&User>,
    ) -> Result<Option<Chapter>, AppError> {
        let stories = StoryRepository::new(self.db);
        let chapters = ChapterRepository::new(self.db);

        let Some((story, _)) = stories.find_by_slug_with_categories(story_slug).await? else {
            return Ok(None);
        };

        let Some(chapter) = chapters.find_by_slug(story.id, chapter_slug).await? else {
            return Ok(None);
        };

        let is_owner = viewer
            .map(|v| v.is_admin() || v.id == story.author_id)
            .unwrap_or(false);

        if (!story.is_published || !chapter.is_published) && !is_owner {
            return Ok(None);
        }

        if !is_owner {
            chapters.increment_view(chapter.id).await?;
        }

        Ok(Some(chapter))
    }

    /// Admin moderation list, unpublished chapters included.
    pub async fn get_admin_list(
        &self,
        page: u64,
        limit: u64,
        story_id: Option<i32>,
    ) -> Result<crate::server::model::Page<Chapter>, AppError> {
        let chapters = ChapterRepository::new(self.db);

        let (items, total) = chapters
            .get_all_paginated(page.saturating_sub(1), limit, story_id)
            .await?;

        Ok(crate::server::model::Page::new(items, total, page, limit))
    }

    fn check_ownership(&self, actor: &User, author_id: i32) -> Result<(), AppError> {
        if actor.is_admin() || actor.id == author_id {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            actor.id,
            "Story belongs to another author".to_string(),
        )
        .into())
    }

    /// Ownership of a chapter follows the story it belongs to.
    async fn check_chapter_ownership(
        &self,
        actor: &User,
        chapter: &Chapter,
    ) -> Result<(), AppError> {
        let stories = StoryRepository::new(self.db);

        let Some(story) = stories.find_by_id(chapter.story_id).await? else {
            return Err(AppError::NotFound("Story not found".to_string()));
        };

        self.check_ownership(actor, story.author_id)
    }

    async fn unique_slug(
        &self,
        story_id: i32,
        title: &str,
        current: Option<&str>,
    ) -> Result<String, AppError> {
        let repo = ChapterRepository::new(self.db);

        let base = slugify(title);
        if base.is_empty() {
            return Err(AppError::BadRequest(
                "Title must contain at least one letter or digit".to_string(),
            ));
        }

        for n in 0..=MAX_SLUG_ATTEMPTS {
            let slug = candidate(&base, n);

            if current == Some(slug.as_str()) {
                return Ok(slug);
            }
            if !repo.slug_exists(story_id, &slug).await? {
                return Ok(slug);
            }
        }

        Err(AppError::Conflict(format!(
            "Could not find a unique slug for '{}'",
            title
        )))
    }
}
