use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::server::{
    config::{Config, OAuthProviderConfig},
    error::AppError,
    service::email::EmailService,
    state::{OAuth2Client, OAuthProvider},
};

/// Connects to the PostgreSQL database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to
/// ensure the database schema is up-to-date. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the cookie-session layer backed by the application database.
///
/// Sessions are stored in a dedicated table managed by the session store and
/// expire after seven days of inactivity, matching the cookie-credential
/// model the web and mobile clients rely on.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<PostgresStore>, AppError> {
    let pool = db.get_postgres_connection_pool().clone();

    let store = PostgresStore::new(pool);
    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(store).with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for OAuth userinfo requests.
///
/// Redirects are disabled so a malicious provider response cannot bounce the
/// server into internal endpoints.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Builds an OAuth2 client for one provider, pointing its redirect URL back
/// at this API's callback route.
pub fn setup_oauth_client(
    provider: &OAuthProviderConfig,
    app_url: &str,
    callback_path: &str,
) -> Result<OAuthProvider, AppError> {
    let client = oauth2::basic::BasicClient::new(ClientId::new(provider.client_id.clone()))
        .set_client_secret(ClientSecret::new(provider.client_secret.clone()))
        .set_auth_uri(AuthUrl::new(provider.auth_url.clone())?)
        .set_token_uri(TokenUrl::new(provider.token_url.clone())?)
        .set_redirect_uri(RedirectUrl::new(format!("{}{}", app_url, callback_path))?);

    let client: OAuth2Client = client;

    Ok(OAuthProvider {
        client,
        userinfo_url: provider.userinfo_url.clone(),
    })
}

/// Builds the notification mailer from configuration.
///
/// With SMTP configured the mailer sends over an authenticated, TLS-wrapped
/// connection; without it the mailer logs every message to the console so
/// registration and moderation flows keep working in development.
pub fn setup_mailer(config: &Config) -> Result<EmailService, AppError> {
    match &config.email {
        Some(email) => EmailService::smtp(email, &config.frontend_url),
        None => Ok(EmailService::console(&config.frontend_url)),
    }
}
