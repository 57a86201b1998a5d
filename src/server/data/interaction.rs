//! Reader interactions with stories: likes, follows, and ratings.
//!
//! Each interaction is a join row keyed on (user, story). The corresponding
//! denormalized counters on the story row are maintained by the services,
//! which pair these operations with the counter adjustments in
//! `StoryRepository`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct InteractionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InteractionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a like. Returns false when the user already likes the story,
    /// so callers only bump the counter on an actual insert.
    pub async fn like(&self, user_id: i32, story_id: i32) -> Result<bool, DbErr> {
        if self.likes(user_id, story_id).await? {
            return Ok(false);
        }

        entity::story_like::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            story_id: ActiveValue::Set(story_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    pub async fn unlike(&self, user_id: i32, story_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StoryLike::delete_many()
            .filter(entity::story_like::Column::UserId.eq(user_id))
            .filter(entity::story_like::Column::StoryId.eq(story_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn likes(&self, user_id: i32, story_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::StoryLike::find()
            .filter(entity::story_like::Column::UserId.eq(user_id))
            .filter(entity::story_like::Column::StoryId.eq(story_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records a follow. Returns false when already following.
    pub async fn follow(&self, user_id: i32, story_id: i32) -> Result<bool, DbErr> {
        if self.follows(user_id, story_id).await? {
            return Ok(false);
        }

        entity::story_follow::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            story_id: ActiveValue::Set(story_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    pub async fn unfollow(&self, user_id: i32, story_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StoryFollow::delete_many()
            .filter(entity::story_follow::Column::UserId.eq(user_id))
            .filter(entity::story_follow::Column::StoryId.eq(story_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn follows(&self, user_id: i32, story_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::StoryFollow::find()
            .filter(entity::story_follow::Column::UserId.eq(user_id))
            .filter(entity::story_follow::Column::StoryId.eq(story_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Stores or replaces the user's rating for a story.
    pub async fn rate(&self, user_id: i32, story_id: i32, score: i16) -> Result<(), DbErr> {
        let existing = entity::prelude::StoryRating::find()
            .filter(entity::story_rating::Column::UserId.eq(user_id))
            .filter(entity::story_rating::Column::StoryId.eq(story_id))
            .one(self.db)
            .await?;

        match existing {
            Some(rating) => {
                let mut active: entity::story_rating::ActiveModel = rating.into();
                active.score = ActiveValue::Set(score);
                active.update(self.db).await?;
            }
            None => {
                entity::story_rating::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    story_id: ActiveValue::Set(story_id),
                    score: ActiveValue::Set(score),
                    created_at: ActiveValue::Set(Utc::now()),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Recomputes the aggregate (average, count) over all ratings of a story.
    pub async fn aggregate_rating(&self, story_id: i32) -> Result<(f64, i32), DbErr> {
        let ratings = entity::prelude::StoryRating::find()
            .filter(entity::story_rating::Column::StoryId.eq(story_id))
            .all(self.db)
            .await?;

        if ratings.is_empty() {
            return Ok((0.0, 0));
        }

        let count = ratings.len() as i32;
        let sum: i64 = ratings.iter().map(|r| r.score as i64).sum();

        Ok((sum as f64 / count as f64, count))
    }
}
