//! OAuth2 login with Google and Facebook.
//!
//! Both providers run the same redirect flow: `login_url` produces the
//! authorize URL plus a CSRF token the controller stashes in the session,
//! and `callback` exchanges the returned code, fetches the provider profile,
//! and upserts the account.

pub mod callback;
pub mod login;

use entity::user::AuthProvider;

use crate::server::state::OAuthProvider as OAuthProviderState;

pub struct OAuthService<'a> {
    http_client: &'a reqwest::Client,
    provider: &'a OAuthProviderState,
    kind: AuthProvider,
}

impl<'a> OAuthService<'a> {
    pub fn google(http_client: &'a reqwest::Client, provider: &'a OAuthProviderState) -> Self {
        Self {
            http_client,
            provider,
            kind: AuthProvider::Google,
        }
    }

    pub fn facebook(http_client: &'a reqwest::Client, provider: &'a OAuthProviderState) -> Self {
        Self {
            http_client,
            provider,
            kind: AuthProvider::Facebook,
        }
    }
}
