use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

const FACEBOOK_AUTH_URL: &str = "https://www.facebook.com/v19.0/dialog/oauth";
const FACEBOOK_TOKEN_URL: &str = "https://graph.facebook.com/v19.0/oauth/access_token";
const FACEBOOK_USERINFO_URL: &str = "https://graph.facebook.com/me?fields=id,name,email,picture";

/// SMTP settings. Only present when the operator has configured mail
/// delivery; without it the mailer logs messages to the console instead.
#[derive(Clone)]
pub struct EmailConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub from: String,
}

/// One OAuth provider's credentials and endpoints.
#[derive(Clone)]
pub struct OAuthProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    /// Public base URL of this API, used for OAuth redirect URLs.
    pub app_url: String,
    /// Base URL of the reading frontend, used for CORS, OAuth redirects and
    /// links embedded in notification emails.
    pub frontend_url: String,

    pub email: Option<EmailConfig>,
    pub google: Option<OAuthProviderConfig>,
    pub facebook: Option<OAuthProviderConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_addr: std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string()),
            app_url: std::env::var("APP_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            frontend_url: std::env::var("FRONTEND_URL")
                .map_err(|_| ConfigError::MissingEnvVar("FRONTEND_URL".to_string()))?,
            email: Self::email_from_env()?,
            google: Self::oauth_from_env("GOOGLE", GOOGLE_AUTH_URL, GOOGLE_TOKEN_URL, GOOGLE_USERINFO_URL),
            facebook: Self::oauth_from_env(
                "FACEBOOK",
                FACEBOOK_AUTH_URL,
                FACEBOOK_TOKEN_URL,
                FACEBOOK_USERINFO_URL,
            ),
        })
    }

    /// Reads `EMAIL_HOST`/`EMAIL_USER`/`EMAIL_PASSWORD` (all three required
    /// for delivery), `EMAIL_PORT` (default 587) and `EMAIL_FROM` (defaults
    /// to `EMAIL_USER`). Returns None when delivery is not configured.
    fn email_from_env() -> Result<Option<EmailConfig>, AppError> {
        let (Ok(host), Ok(user), Ok(password)) = (
            std::env::var("EMAIL_HOST"),
            std::env::var("EMAIL_USER"),
            std::env::var("EMAIL_PASSWORD"),
        ) else {
            return Ok(None);
        };

        let port = match std::env::var("EMAIL_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar("EMAIL_PORT".to_string(), e.to_string())
            })?,
            Err(_) => 587,
        };

        let from = std::env::var("EMAIL_FROM").unwrap_or_else(|_| user.clone());

        Ok(Some(EmailConfig {
            host,
            port,
            user,
            password,
            from,
        }))
    }

    /// Reads `{PREFIX}_CLIENT_ID` / `{PREFIX}_CLIENT_SECRET`. A provider with
    /// incomplete credentials is treated as unconfigured rather than an
    /// error, so deployments can enable providers independently.
    fn oauth_from_env(
        prefix: &str,
        auth_url: &str,
        token_url: &str,
        userinfo_url: &str,
    ) -> Option<OAuthProviderConfig> {
        let client_id = std::env::var(format!("{}_CLIENT_ID", prefix)).ok()?;
        let client_secret = std::env::var(format!("{}_CLIENT_SECRET", prefix)).ok()?;

        Some(OAuthProviderConfig {
            client_id,
            client_secret,
            auth_url: auth_url.to_string(),
            token_url: token_url.to_string(),
            userinfo_url: userinfo_url.to_string(),
        })
    }
}
