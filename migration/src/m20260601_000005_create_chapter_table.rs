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
                    .table(Chapter::Table)
                    .if_not_exists()
                    .col(pk_auto(Chapter::Id))
                    .col(integer(Chapter::StoryId))
                    .col(string(Chapter::Title))
                    .col(string(Chapter::Slug))
                    .col(text(Chapter::Content))
                    .col(integer(Chapter::SortOrder))
                    .col(integer(Chapter::UploaderId))
                    .col(integer(Chapter::WordCount).default(0))
                    .col(integer(Chapter::ReadingTime).default(0))
                    .col(big_integer(Chapter::ViewCount).default(0))
                    .col(boolean(Chapter::IsPublished).default(false))
                    .col(
                        timestamp(Chapter::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Chapter::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapter_story_id")
                            .from(Chapter::Table, Chapter::StoryId)
                            .to(Story::Table, Story::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapter_uploader_id")
                            .from(Chapter::Table, Chapter::UploaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Chapter slugs are only unique within their story.
        manager
            .create_index(
                Index::create()
                    .name("idx_chapter_story_id_slug")
                    .table(Chapter::Table)
                    .col(Chapter::StoryId)
                    .col(Chapter::Slug)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chapter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chapter {
    Table,
    Id,
    StoryId,
    Title,
    Slug,
    Content,
    SortOrder,
    UploaderId,
    WordCount,
    ReadingTime,
    ViewCount,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}
