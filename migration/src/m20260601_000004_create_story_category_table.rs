use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260601_000002_create_category_table::Category, m20260601_000003_create_story_table::Story,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoryCategory::Table)
                    .if_not_exists()
                    .col(integer(StoryCategory::StoryId))
                    .col(integer(StoryCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(StoryCategory::StoryId)
                            .col(StoryCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_category_story_id")
                            .from(StoryCategory::Table, StoryCategory::StoryId)
                            .to(Story::Table, Story::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_category_category_id")
                            .from(StoryCategory::Table, StoryCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoryCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoryCategory {
    Table,
    StoryId,
    CategoryId,
}
