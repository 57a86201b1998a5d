use oauth2::{AuthorizationCode, TokenResponse};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{OAuthUserParams, User},
    service::oauth::OAuthService,
    util::slug::{candidate, slugify, MAX_SLUG_ATTEMPTS},
};

/// Normalized profile fields shared by both providers.
struct ProviderProfile {
    email: String,
    name: Option<String>,
    avatar: Option<String>,
}

impl<'a> OAuthService<'a> {
    /// Completes the OAuth flow: exchanges the authorization code, fetches
    /// the provider profile, and upserts the matching account.
    pub async fn callback(
        &self,
        db: &DatabaseConnection,
        authorization_code: String,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(db);

        let token = self
            .provider
            .client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::CodeExchangeFailed(e.to_string()))?;

        let profile = self.fetch_profile(token.access_token().secret()).await?;

        let username = self
            .available_username(&user_repo, &profile)
            .await?;

        let entity = user_repo
            .upsert_oauth(OAuthUserParams {
                email: profile.email,
                username,
                display_name: profile.name,
                avatar: profile.avatar,
                provider: self.kind.clone(),
            })
            .await?;

        let user = User::from_entity(entity);

        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }

        Ok(user)
    }

    /// Retrieves the user's profile from the provider with the access token.
    ///
    /// Google's userinfo endpoint returns a flat object with `picture` as a
    /// string; Facebook nests the avatar under `picture.data.url`. Both are
    /// handled here so the rest of the flow sees one shape.
    async fn fetch_profile(&self, access_token: &str) -> Result<ProviderProfile, AppError> {
        let payload = self
            .http_client
            .get(&self.provider.userinfo_url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;

        let Some(email) = payload["email"].as_str() else {
            // Facebook omits the email when the user denies the permission;
            // without one there is no account identity to attach to.
            return Err(AppError::BadRequest(
                "The OAuth provider did not share an email address".to_string(),
            ));
        };

        let avatar = payload["picture"]
            .as_str()
            .or_else(|| payload["picture"]["data"]["url"].as_str())
            .map(str::to_string);

        Ok(ProviderProfile {
            email: email.to_lowercase(),
            name: payload["name"].as_str().map(str::to_string),
            avatar,
        })
    }

    /// Derives a free username from the provider profile.
    ///
    /// Uses the same transliteration as content slugs, falling back to the
    /// email's local part, and disambiguates with numeric suffixes.
    async fn available_username(
        &self,
        repo: &UserRepository<'_>,
        profile: &ProviderProfile,
    ) -> Result<String, AppError> {
        let mut base = profile
            .name
            .as_deref()
            .map(slugify)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                slugify(profile.email.split('@').next().unwrap_or_default())
            });

        if base.is_empty() {
            base = "reader".to_string();
        }

        for n in 0..=MAX_SLUG_ATTEMPTS {
            let username = candidate(&base, n);
            if !repo.username_exists(&username).await? {
                return Ok(username);
            }
        }

        Err(AppError::Conflict(format!(
            "Could not derive a free username from '{}'",
            base
        )))
    }
}
