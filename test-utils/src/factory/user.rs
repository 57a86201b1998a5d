//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("custom@example.com")
///     .role(entity::user::UserRole::Admin)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    username: String,
    password_hash: Option<String>,
    display_name: Option<String>,
    role: entity::user::UserRole,
    is_active: bool,
    email_verified: bool,
    verification_token: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - username: `"user{id}"`
    /// - role: `UserRole::User`, active, email verified
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            username: format!("user{}", id),
            password_hash: None,
            display_name: None,
            role: entity::user::UserRole::User,
            is_active: true,
            email_verified: true,
            verification_token: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = Some(hash.into());
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn role(mut self, role: entity::user::UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn email_verified(mut self, verified: bool) -> Self {
        self.email_verified = verified;
        self
    }

    pub fn verification_token(mut self, token: impl Into<String>) -> Self {
        self.verification_token = Some(token.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            display_name: ActiveValue::Set(self.display_name),
            role: ActiveValue::Set(self.role),
            is_active: ActiveValue::Set(self.is_active),
            email_verified: ActiveValue::Set(self.email_verified),
            provider: ActiveValue::Set(entity::user::AuthProvider::Local),
            avatar: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            verification_token: ActiveValue::Set(self.verification_token),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .role(entity::user::UserRole::Admin)
        .build()
        .await
}

/// Creates an author user with default values.
pub async fn create_author(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .role(entity::user::UserRole::Author)
        .build()
        .await
}
