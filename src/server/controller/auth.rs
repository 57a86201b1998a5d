use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::auth::{LoginDto, RegisterDto, VerifyEmailDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::{auth::AuthService, oauth::OAuthService},
        state::AppState,
    },
};

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from the provider for token exchange.
    pub code: String,
}

pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.register(payload, &state.mailer).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.login(&payload.email, &payload.password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

pub async fn verify_email(
    State(state): State<AppState>,
    Query(params): Query<VerifyEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.verify_email(&params.token, &state.mailer).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(provider) = &state.google else {
        return Err(AuthError::ProviderNotConfigured("Google").into());
    };

    let auth_service = OAuthService::google(&state.http_client, provider);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token("google", csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

pub async fn google_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(provider) = &state.google else {
        return Err(AuthError::ProviderNotConfigured("Google").into());
    };

    validate_csrf(&session, &params.0.state).await?;

    let auth_service = OAuthService::google(&state.http_client, provider);
    let user = auth_service.callback(&state.db, params.0.code).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::temporary(&state.frontend_url))
}

pub async fn facebook_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(provider) = &state.facebook else {
        return Err(AuthError::ProviderNotConfigured("Facebook").into());
    };

    let auth_service = OAuthService::facebook(&state.http_client, provider);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token("facebook", csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

pub async fn facebook_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(provider) = &state.facebook else {
        return Err(AuthError::ProviderNotConfigured("Facebook").into());
    };

    validate_csrf(&session, &params.0.state).await?;

    let auth_service = OAuthService::facebook(&state.http_client, provider);
    let user = auth_service.callback(&state.db, params.0.code).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::temporary(&state.frontend_url))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
