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
                    .table(StoryFollow::Table)
                    .if_not_exists()
                    .col(integer(StoryFollow::UserId))
                    .col(integer(StoryFollow::StoryId))
                    .col(
                        timestamp(StoryFollow::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(StoryFollow::UserId)
                            .col(StoryFollow::StoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_follow_user_id")
                            .from(StoryFollow::Table, StoryFollow::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_follow_story_id")
                            .from(StoryFollow::Table, StoryFollow::StoryId)
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
            .drop_table(Table::drop().table(StoryFollow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoryFollow {
    Table,
    UserId,
    StoryId,
    CreatedAt,
}
