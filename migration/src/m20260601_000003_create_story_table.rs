use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Story::Table)
                    .if_not_exists()
                    .col(pk_auto(Story::Id))
                    .col(string(Story::Title))
                    .col(string_uniq(Story::Slug))
                    .col(text_null(Story::Description))
                    .col(string_null(Story::CoverImage))
                    .col(integer(Story::AuthorId))
                    .col(string(Story::AuthorName))
                    .col(string(Story::Status).default("draft"))
                    .col(boolean(Story::IsPublished).default(false))
                    .col(boolean(Story::IsRecommended).default(false))
                    .col(string_null(Story::Tags))
                    .col(string_null(Story::Country))
                    .col(big_integer(Story::ViewCount).default(0))
                    .col(big_integer(Story::LikeCount).default(0))
                    .col(big_integer(Story::FollowCount).default(0))
                    .col(double(Story::Rating).default(0.0))
                    .col(integer(Story::RatingCount).default(0))
                    .col(
                        timestamp(Story::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Story::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_author_id")
                            .from(Story::Table, Story::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Story::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Story {
    Table,
    Id,
    Title,
    Slug,
    Description,
    CoverImage,
    AuthorId,
    AuthorName,
    Status,
    IsPublished,
    IsRecommended,
    Tags,
    Country,
    ViewCount,
    LikeCount,
    FollowCount,
    Rating,
    RatingCount,
    CreatedAt,
    UpdatedAt,
}
