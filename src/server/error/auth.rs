use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Can happen when an account is removed while a session for it is still
    /// live. Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Email/password combination did not match an account.
    ///
    /// Results in a 401 Unauthorized response with a message that does not
    /// reveal whether the email exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account has been deactivated by moderation.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Account is deactivated")]
    AccountDisabled,

    /// Registration attempted with an email or username already in use.
    ///
    /// Results in a 409 Conflict response.
    #[error("{0} is already in use")]
    AlreadyRegistered(&'static str),

    /// Email verification attempted with an unknown or spent token.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired verification token")]
    InvalidVerificationToken,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token
    /// stored in the session, indicating a potential CSRF attack or an invalid
    /// callback request. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Login attempted through an OAuth provider that has no credentials
    /// configured.
    ///
    /// Results in a 503 Service Unavailable response.
    #[error("OAuth provider {0} is not configured")]
    ProviderNotConfigured(&'static str),

    /// The OAuth token exchange with the provider failed.
    ///
    /// Results in a 400 Bad Request response with a generic message.
    #[error("OAuth code exchange failed: {0}")]
    CodeExchangeFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic to avoid information leakage; the full
/// variant is logged where it is raised.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in".to_string())
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to do that".to_string(),
            ),
            Self::AccountDisabled => (
                StatusCode::FORBIDDEN,
                "This account has been deactivated".to_string(),
            ),
            Self::AlreadyRegistered(field) => {
                (StatusCode::CONFLICT, format!("{} is already in use", field))
            }
            Self::InvalidVerificationToken => (
                StatusCode::BAD_REQUEST,
                "Invalid or expired verification token".to_string(),
            ),
            Self::CsrfValidationFailed | Self::CodeExchangeFailed(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.".to_string(),
            ),
            Self::ProviderNotConfigured(provider) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Login via {} is not available", provider),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
