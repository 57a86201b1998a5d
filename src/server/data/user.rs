//! User data repository for database operations.
//!
//! Handles account creation, credential lookups, profile updates, and the
//! moderation operations (role changes, activation toggles) with conversion
//! between entity models and domain models at the infrastructure boundary.
//! Credential material (password hash, verification token) is only exposed
//! through the entity-returning lookup methods used by the auth service.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, OAuthUserParams, UpdateProfileParams, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a local account from registration parameters.
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(Some(params.password_hash)),
            display_name: ActiveValue::Set(params.display_name),
            role: ActiveValue::Set(params.role),
            is_active: ActiveValue::Set(true),
            email_verified: ActiveValue::Set(params.email_verified),
            provider: ActiveValue::Set(entity::user::AuthProvider::Local),
            verification_token: ActiveValue::Set(params.verification_token),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Creates or refreshes an account from an OAuth provider profile.
    ///
    /// Keyed on email: a returning user logs into their existing account
    /// (profile display fields are refreshed), a new email creates an
    /// email-verified account with no password hash.
    pub async fn upsert_oauth(&self, params: OAuthUserParams) -> Result<entity::user::Model, DbErr> {
        let existing = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(&params.email))
            .one(self.db)
            .await?;

        match existing {
            Some(user) => {
                let mut active: entity::user::ActiveModel = user.into();
                if params.display_name.is_some() {
                    active.display_name = ActiveValue::Set(params.display_name);
                }
                if params.avatar.is_some() {
                    active.avatar = ActiveValue::Set(params.avatar);
                }
                active.updated_at = ActiveValue::Set(Utc::now());
                active.update(self.db).await
            }
            None => {
                let now = Utc::now();
                entity::user::ActiveModel {
                    email: ActiveValue::Set(params.email),
                    username: ActiveValue::Set(params.username),
                    password_hash: ActiveValue::Set(None),
                    display_name: ActiveValue::Set(params.display_name),
                    role: ActiveValue::Set(entity::user::UserRole::User),
                    is_active: ActiveValue::Set(true),
                    email_verified: ActiveValue::Set(true),
                    provider: ActiveValue::Set(params.provider),
                    avatar: ActiveValue::Set(params.avatar),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Credential lookup for login; returns the entity so the auth service
    /// can check the stored password hash.
    pub async fn find_entity_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_entity_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::VerificationToken.eq(token))
            .one(self.db)
            .await
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Marks the account's email as verified and clears the one-shot token.
    pub async fn mark_email_verified(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::EmailVerified,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::user::Column::VerificationToken,
                sea_orm::sea_query::Expr::value(Option::<String>::None),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Updates the user's own profile fields.
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.display_name = ActiveValue::Set(params.display_name);
        active.avatar = ActiveValue::Set(params.avatar);
        active.bio = ActiveValue::Set(params.bio);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Gets all users with pagination for the admin user management screen.
    ///
    /// An optional search term matches against email, username, and display
    /// name. Results are ordered alphabetically by username.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    /// - `search` - Optional case-preserving substring filter
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total match count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
        search: Option<&str>,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(term) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::Email.contains(term))
                    .add(entity::user::Column::Username.contains(term))
                    .add(entity::user::Column::DisplayName.contains(term)),
            );
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Sets the account's role.
    pub async fn set_role(&self, id: i32, role: entity::user::UserRole) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Role,
                sea_orm::sea_query::Expr::value(role),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Activates or deactivates the account. Accounts are never hard-deleted.
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::IsActive,
                sea_orm::sea_query::Expr::value(is_active),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
