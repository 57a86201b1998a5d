//! Story business logic: slug assignment, ownership checks, listings, and
//! reader interactions.

use sea_orm::DatabaseConnection;

use crate::{
    model::story::{CreateStoryDto, UpdateStoryDto},
    server::{
        data::{interaction::InteractionRepository, story::StoryRepository},
        error::{auth::AuthError, AppError},
        model::{
            story::{
                str_to_status, CreateStoryParams, Story, StoryFilter, StoryListItem,
                UpdateStoryParams,
            },
            user::User,
            Page,
        },
        util::slug::{candidate, slugify, MAX_SLUG_ATTEMPTS},
    },
};

pub struct StoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a story owned by `author`, deriving a globally unique slug
    /// from the title.
    pub async fn create(&self, author: &User, dto: CreateStoryDto) -> Result<Story, AppError> {
        let repo = StoryRepository::new(self.db);

        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }

        let slug = self.unique_slug(&title, None).await?;

        let story = repo
            .create(CreateStoryParams {
                author_id: author.id,
                author_name: author.public_name().to_string(),
                title,
                slug,
                description: dto.description,
                cover_image: dto.cover_image,
                tags: dto.tags,
                country: dto.country,
                category_ids: dto.category_ids,
            })
            .await?;

        let (story, categories) = repo
            .find_by_id_with_categories(story.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found after creation".to_string()))?;

        Ok(Story::from_entity(story, categories))
    }

    /// Updates a story. Authors may only touch their own stories; admins may
    /// touch any. A changed title gets a fresh slug.
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        dto: UpdateStoryDto,
    ) -> Result<Option<Story>, AppError> {
        let repo = StoryRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        self.check_ownership(actor, existing.author_id)?;

        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }

        let status = str_to_status(&dto.status)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown status '{}'", dto.status)))?;

        let slug = if title != existing.title {
            Some(self.unique_slug(&title, Some(&existing.slug)).await?)
        } else {
            None
        };

        let updated = repo
            .update(UpdateStoryParams {
                id,
                title,
                slug,
                description: dto.description,
                cover_image: dto.cover_image,
                tags: dto.tags,
                country: dto.country,
                status,
                category_ids: dto.category_ids,
            })
            .await?;

        let Some(updated) = updated else {
            return Ok(None);
        };

        let result = repo.find_by_id_with_categories(updated.id).await?;

        Ok(result.map(|(story, categories)| Story::from_entity(story, categories)))
    }

    /// Deletes a story after an ownership check.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<bool, AppError> {
        let repo = StoryRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(false);
        };

        self.check_ownership(actor, existing.author_id)?;

        Ok(repo.delete(id).await?)
    }

    /// Paginated listing with the caller's filter applied.
    pub async fn get_paginated(
        &self,
        filter: &StoryFilter,
        page: u64,
        limit: u64,
    ) -> Result<Page<StoryListItem>, AppError> {
        let repo = StoryRepository::new(self.db);

        let (items, total) = repo
            .get_paginated(filter, page.saturating_sub(1), limit)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }

    /// Public story detail by slug. Unpublished stories are only visible to
    /// their author and admins; a successful public read bumps the view
    /// counter.
    pub async fn get_by_slug(
        &self,
        slug: &str,
        viewer: Option<&User>,
    ) -> Result<Option<Story>, AppError> {
        let repo = StoryRepository::new(self.db);

        let Some((story, categories)) = repo.find_by_slug_with_categories(slug).await? else {
            return Ok(None);
        };

        if !story.is_published {
            let allowed = viewer
                .map(|v| v.is_admin() || v.id == story.author_id)
                .unwrap_or(false);
            if !allowed {
                return Ok(None);
            }
        } else {
            repo.increment_view(story.id).await?;
        }

        Ok(Some(Story::from_entity(story, categories)))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Story>, AppError> {
        let repo = StoryRepository::new(self.db);

        let result = repo.find_by_id_with_categories(id).await?;

        Ok(result.map(|(story, categories)| Story::from_entity(story, categories)))
    }

    /// Adds a like; the denormalized counter only moves when a row was
    /// actually inserted, so repeated likes stay idempotent.
    pub async fn like(&self, user_id: i32, story_id: i32) -> Result<(), AppError> {
        let stories = StoryRepository::new(self.db);
        let interactions = InteractionRepository::new(self.db);

        if stories.find_by_id(story_id).await?.is_none() {
            return Err(AppError::NotFound("Story not found".to_string()));
        }

        if interactions.like(user_id, story_id).await? {
            stories.adjust_like_count(story_id, 1).await?;
        }

        Ok(())
    }

    pub async fn unlike(&self, user_id: i32, story_id: i32) -> Result<(), AppError> {
        let stories = StoryRepository::new(self.db);
        let interactions = InteractionRepository::new(self.db);

        if interactions.unlike(user_id, story_id).await? {
            stories.adjust_like_count(story_id, -1).await?;
        }

        Ok(())
    }

    pub async fn follow(&self, user_id: i32, story_id: i32) -> Result<(), AppError> {
        let stories = StoryRepository::new(self.db);
        let interactions = InteractionRepository::new(self.db);

        if stories.find_by_id(story_id).await?.is_none() {
            return Err(AppError::NotFound("Story not found".to_string()));
        }

        if interactions.follow(user_id, story_id).await? {
            stories.adjust_follow_count(story_id, 1).await?;
        }

        Ok(())
    }

    pub async fn unfollow(&self, user_id: i32, story_id: i32) -> Result<(), AppError> {
        let stories = StoryRepository::new(self.db);
        let interactions = InteractionRepository::new(self.db);

        if interactions.unfollow(user_id, story_id).await? {
            stories.adjust_follow_count(story_id, -1).await?;
        }

        Ok(())
    }

    /// Upserts the user's rating and recomputes the story aggregate.
    pub async fn rate(&self, user_id: i32, story_id: i32, score: i16) -> Result<(f64, i32), AppError> {
        if !(1..=5).contains(&score) {
            return Err(AppError::BadRequest(
                "Score must be between 1 and 5".to_string(),
            ));
        }

        let stories = StoryRepository::new(self.db);
        let interactions = InteractionRepository::new(self.db);

        if stories.find_by_id(story_id).await?.is_none() {
            return Err(AppError::NotFound("Story not found".to_string()));
        }

        interactions.rate(user_id, story_id, score).await?;

        let (rating, count) = interactions.aggregate_rating(story_id).await?;
        stories.set_rating(story_id, rating, count).await?;

        Ok((rating, count))
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

    /// Finds a free slug for a title, probing `title`, `title-1`, ... up to
    /// the attempt cap. `current` short-circuits updates that keep their
    /// existing slug. Exhausting the cap is a conflict, not a silent reuse.
    async fn unique_slug(&self, title: &str, current: Option<&str>) -> Result<String, AppError> {
        let repo = StoryRepository::new(self.db);

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
            if !repo.slug_exists(&slug).await? {
                return Ok(slug);
            }
        }

        Err(AppError::Conflict(format!(
            "Could not find a unique slug for '{}'",
            title
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::story::CreateStoryDto;
    use crate::server::model::user::User;
    use test_utils::{builder::TestBuilder, factory};

    fn dto(title: &str) -> CreateStoryDto {
        CreateStoryDto {
            title: title.to_string(),
            description: None,
            cover_image: None,
            tags: None,
            country: None,
            category_ids: vec![],
        }
    }

    #[tokio::test]
    async fn derives_diacritic_free_slugs() {
        let mut test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.database().await.unwrap();

        let author = User::from_entity(factory::user::create_author(db).await.unwrap());

        let service = StoryService::new(db);
        let story = service
            .create(&author, dto("Kiếm Động Cửu Thiên"))
            .await
            .unwrap();

        assert_eq!(story.slug, "kiem-dong-cuu-thien");
        assert!(story
            .slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }

    #[tokio::test]
    async fn identical_titles_get_suffixed_slugs() {
        let mut test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.database().await.unwrap();

        let author = User::from_entity(factory::user::create_author(db).await.unwrap());

        let service = StoryService::new(db);
        let first = service.create(&author, dto("Trùng Tên")).await.unwrap();
        let second = service.create(&author, dto("Trùng Tên")).await.unwrap();
        let third = service.create(&author, dto("Trùng Tên")).await.unwrap();

        assert_eq!(first.slug, "trung-ten");
        assert_eq!(second.slug, "trung-ten-1");
        assert_eq!(third.slug, "trung-ten-2");
    }

    #[tokio::test]
    async fn title_without_letters_is_rejected() {
        let mut test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.database().await.unwrap();

        let author = User::from_entity(factory::user::create_author(db).await.unwrap());

        let service = StoryService::new(db);
        let result = service.create(&author, dto("★☆★")).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn rating_updates_story_aggregate() {
        let mut test = TestBuilder::new()
            .with_interaction_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let author = factory::user::create_author(db).await.unwrap();
        let story = factory::story::create_story(db, author.id).await.unwrap();
        let reader = factory::user::create_user(db).await.unwrap();

        let service = StoryService::new(db);
        let (average, count) = service.rate(reader.id, story.id, 4).await.unwrap();

        assert_eq!(average, 4.0);
        assert_eq!(count, 1);

        let refreshed = StoryRepository::new(db)
            .find_by_id(story.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(refreshed.rating, 4.0);
        assert_eq!(refreshed.rating_count, 1);
    }

    #[tokio::test]
    async fn out_of_range_score_is_rejected() {
        let mut test = TestBuilder::new()
            .with_interaction_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let author = factory::user::create_author(db).await.unwrap();
        let story = factory::story::create_story(db, author.id).await.unwrap();
        let reader = factory::user::create_user(db).await.unwrap();

        let service = StoryService::new(db);

        assert!(service.rate(reader.id, story.id, 0).await.is_err());
        assert!(service.rate(reader.id, story.id, 6).await.is_err());
    }

    #[tokio::test]
    async fn authors_cannot_touch_foreign_stories() {
        let mut test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.database().await.unwrap();

        let owner = User::from_entity(factory::user::create_author(db).await.unwrap());
        let other = User::from_entity(factory::user::create_author(db).await.unwrap());

        let service = StoryService::new(db);
        let story = service.create(&owner, dto("Của Tôi")).await.unwrap();

        let result = service.delete(&other, story.id).await;

        assert!(matches!(result, Err(AppError::AuthErr(_))));
    }
}
