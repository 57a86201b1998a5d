use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ad::Table)
                    .if_not_exists()
                    .col(pk_auto(Ad::Id))
                    .col(string(Ad::AdType))
                    .col(string(Ad::Position))
                    .col(string(Ad::ImageUrl))
                    .col(string(Ad::LinkUrl))
                    .col(string_null(Ad::Title))
                    .col(boolean(Ad::IsActive).default(true))
                    .col(
                        timestamp(Ad::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ad::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ad {
    Table,
    Id,
    AdType,
    Position,
    ImageUrl,
    LinkUrl,
    Title,
    IsActive,
    CreatedAt,
}
