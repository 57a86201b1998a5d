//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the
//! methods relevant to its concern, preventing key typos and centralizing
//! session-related logic.
//!
//! - `AuthSession` - user authentication state (user id)
//! - `CsrfSession` - CSRF token management for OAuth flows

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_OAUTH_PROVIDER: &str = "auth:oauth_provider";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session after successful authentication.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the authenticated user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management for OAuth flows.
///
/// Tokens are stored during login initiation and validated during the OAuth
/// callback. A token is removed when read, so each one can only be used once.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the CSRF token and the provider that initiated the flow.
    pub async fn set_token(&self, provider: &str, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        self.session
            .insert(SESSION_AUTH_OAUTH_PROVIDER, provider.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        let _provider: Option<String> =
            self.session.remove(SESSION_AUTH_OAUTH_PROVIDER).await?;
        Ok(token)
    }
}
