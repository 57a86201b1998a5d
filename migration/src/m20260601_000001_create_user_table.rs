use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string_uniq(User::Username))
                    .col(string_null(User::PasswordHash))
                    .col(string_null(User::DisplayName))
                    .col(string(User::Role).default("user"))
                    .col(boolean(User::IsActive).default(true))
                    .col(boolean(User::EmailVerified).default(false))
                    .col(string(User::Provider).default("local"))
                    .col(string_null(User::Avatar))
                    .col(text_null(User::Bio))
                    .col(string_null(User::VerificationToken))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    Username,
    PasswordHash,
    DisplayName,
    Role,
    IsActive,
    EmailVerified,
    Provider,
    Avatar,
    Bio,
    VerificationToken,
    CreatedAt,
    UpdatedAt,
}
