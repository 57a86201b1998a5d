mod model;
mod server;

use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    // `hungyeu seed` bootstraps demo data and exits.
    if std::env::args().nth(1).as_deref() == Some("seed") {
        server::seed::run(&db).await?;
        return Ok(());
    }

    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let mailer = startup::setup_mailer(&config)?;

    let google = match &config.google {
        Some(provider) => Some(startup::setup_oauth_client(
            provider,
            &config.app_url,
            "/api/auth/google/callback",
        )?),
        None => None,
    };
    let facebook = match &config.facebook {
        Some(provider) => Some(startup::setup_oauth_client(
            provider,
            &config.app_url,
            "/api/auth/facebook/callback",
        )?),
        None => None,
    };

    if !mailer.is_configured() {
        tracing::warn!("SMTP not configured; notification emails will be logged to the console");
    }

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .frontend_url
                .parse::<HeaderValue>()
                .map_err(|e| AppError::InternalError(format!("Invalid FRONTEND_URL: {}", e)))?,
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let state = AppState::new(
        db,
        http_client,
        google,
        facebook,
        mailer,
        config.frontend_url.clone(),
    );

    let app = server::router::router()
        .with_state(state)
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {}", config.server_addr);

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
