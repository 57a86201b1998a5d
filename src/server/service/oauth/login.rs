use entity::user::AuthProvider;
use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::oauth::OAuthService;

impl<'a> OAuthService<'a> {
    /// Builds the provider authorize URL and the CSRF token to pin in the
    /// session until the callback returns.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let scopes = match self.kind {
            AuthProvider::Google => vec!["openid", "email", "profile"],
            AuthProvider::Facebook => vec!["email", "public_profile"],
            AuthProvider::Local => vec![],
        };

        let mut request = self.provider.client.authorize_url(CsrfToken::new_random);
        for scope in scopes {
            request = request.add_scope(Scope::new(scope.to_string()));
        }

        let (authorize_url, csrf_state) = request.url();

        (authorize_url, csrf_state)
    }
}
