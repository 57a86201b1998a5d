use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Permission required by an endpoint, checked against the account's role.
pub enum Permission {
    /// Author or admin accounts qualify.
    Author,
    /// Admin accounts only.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to an active user and checks every required
    /// permission.
    ///
    /// Deactivated accounts are rejected even with a live session, so a
    /// moderation action takes effect on the user's next request.
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }

        for permission in permissions {
            match permission {
                Permission::Author => {
                    if !user.is_author() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Endpoint requires an author or admin account".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Endpoint requires an admin account".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
