use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260601_000001_create_user_table::User, m20260601_000003_create_story_table::Story,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoryRating::Table)
                    .if_not_exists()
                    .col(integer(StoryRating::UserId))
                    .col(integer(StoryRating::StoryId))
                    .col(small_integer(StoryRating::Score))
                    .col(
                        timestamp(StoryRating::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(StoryRating::UserId)
                            .col(StoryRating::StoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_rating_user_id")
                            .from(StoryRating::Table, StoryRating::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_rating_story_id")
                            .from(StoryRating::Table, StoryRating::StoryId)
                            .to(Story::Table, Story::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoryRating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoryRating {
    Table,
    UserId,
    StoryId,
    Score,
    CreatedAt,
}
