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
                    .table(StoryLike::Table)
                    .if_not_exists()
                    .col(integer(StoryLike::UserId))
                    .col(integer(StoryLike::StoryId))
                    .col(
                        timestamp(StoryLike::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(StoryLike::UserId)
                            .col(StoryLike::StoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_like_user_id")
                            .from(StoryLike::Table, StoryLike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_like_story_id")
                            .from(StoryLike::Table, StoryLike::StoryId)
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
            .drop_table(Table::drop().table(StoryLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoryLike {
    Table,
    UserId,
    StoryId,
    CreatedAt,
}
