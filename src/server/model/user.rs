//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::user::{AuthProvider, UserRole};

use crate::model::user::{AuthorDto, UserDto};

/// Account with role, moderation state, and profile fields.
///
/// Credential material (password hash, verification token) never leaves the
/// repository layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub email_verified: bool,
    pub provider: AuthProvider,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            display_name: entity.display_name,
            role: entity.role,
            is_active: entity.is_active,
            email_verified: entity.email_verified,
            provider: entity.provider,
            avatar: entity.avatar,
            bio: entity.bio,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Authors and admins may publish stories.
    pub fn is_author(&self) -> bool {
        matches!(self.role, UserRole::Author | UserRole::Admin)
    }

    /// Name shown on stories and comments.
    pub fn public_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            display_name: self.display_name,
            role: role_to_str(&self.role).to_string(),
            is_active: self.is_active,
            email_verified: self.email_verified,
            provider: provider_to_str(&self.provider).to_string(),
            avatar: self.avatar,
            bio: self.bio,
            created_at: self.created_at,
        }
    }

    pub fn into_author_dto(self) -> AuthorDto {
        AuthorDto {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            avatar: self.avatar,
            bio: self.bio,
        }
    }
}

pub fn role_to_str(role: &UserRole) -> &'static str {
    match role {
        UserRole::User => "user",
        UserRole::Author => "author",
        UserRole::Admin => "admin",
    }
}

pub fn str_to_role(value: &str) -> Option<UserRole> {
    match value {
        "user" => Some(UserRole::User),
        "author" => Some(UserRole::Author),
        "admin" => Some(UserRole::Admin),
        _ => None,
    }
}

pub fn provider_to_str(provider: &AuthProvider) -> &'static str {
    match provider {
        AuthProvider::Local => "local",
        AuthProvider::Google => "google",
        AuthProvider::Facebook => "facebook",
    }
}

/// Parameters for creating a local (email/password) account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    /// Argon2 PHC string, hashed by the auth service before it reaches the
    /// repository.
    pub password_hash: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    pub email_verified: bool,
    pub verification_token: Option<String>,
}

/// Parameters for upserting an account from an OAuth provider profile.
///
/// Keyed on email: a returning user logs into the same account, a new email
/// creates one. OAuth accounts have no password hash and arrive with their
/// email already verified by the provider.
#[derive(Debug, Clone)]
pub struct OAuthUserParams {
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub provider: AuthProvider,
}

/// Profile fields a user may edit about themselves.
#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: crate::model::user::UpdateProfileDto) -> Self {
        Self {
            display_name: dto.display_name,
            avatar: dto.avatar,
            bio: dto.bio,
        }
    }
}
