//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! and dependencies needed by the application. The state is initialized once
//! during startup and then cloned for each request handler through Axum's
//! state extraction.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::service::email::EmailService;

/// Type alias for a fully configured OAuth2 client (auth and token endpoints
/// set, redirect URL set).
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// One configured OAuth identity provider.
#[derive(Clone)]
pub struct OAuthProvider {
    /// OAuth2 client handling the authorize-URL/token-exchange flow.
    pub client: OAuth2Client,
    /// Endpoint queried with the access token to obtain the user profile.
    pub userinfo_url: String,
}

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types: `DatabaseConnection` is a connection
/// pool, `reqwest::Client` wraps an `Arc`, the OAuth clients are designed to
/// be cloned, and the mailer's SMTP transport pools connections behind an
/// `Arc` as well.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests (OAuth userinfo lookups).
    ///
    /// Configured with redirects disabled to prevent SSRF via crafted
    /// provider responses.
    pub http_client: reqwest::Client,

    /// Google OAuth provider, when configured.
    pub google: Option<OAuthProvider>,

    /// Facebook OAuth provider, when configured.
    pub facebook: Option<OAuthProvider>,

    /// Notification mailer. Falls back to console logging when SMTP is not
    /// configured.
    pub mailer: EmailService,

    /// Base URL of the reading frontend, for OAuth redirects back into the
    /// web app.
    pub frontend_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        google: Option<OAuthProvider>,
        facebook: Option<OAuthProvider>,
        mailer: EmailService,
        frontend_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            google,
            facebook,
            mailer,
            frontend_url,
        }
    }
}
