use super::*;

fn oauth_params(email: &str, username: &str) -> OAuthUserParams {
    OAuthUserParams {
        email: email.to_string(),
        username: username.to_string(),
        display_name: Some("Thanh".to_string()),
        avatar: Some("https://cdn.example.com/a.png".to_string()),
        provider: AuthProvider::Google,
    }
}

/// Tests creating a fresh account from an OAuth profile.
///
/// Expected: account created with no password hash and the email already
/// verified by the provider.
#[tokio::test]
async fn creates_account_for_new_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert_oauth(oauth_params("oauth@example.com", "oauth-user"))
        .await?;

    assert_eq!(user.email, "oauth@example.com");
    assert_eq!(user.provider, AuthProvider::Google);
    assert!(user.password_hash.is_none());
    assert!(user.email_verified);

    Ok(())
}

/// Tests that a returning OAuth login reuses the existing account.
///
/// Expected: no second row; profile display fields are refreshed and the
/// original username is kept.
#[tokio::test]
async fn returning_login_updates_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .upsert_oauth(oauth_params("same@example.com", "original"))
        .await?;

    let mut params = oauth_params("same@example.com", "different");
    params.display_name = Some("Mới".to_string());
    let second = repo.upsert_oauth(params).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.username, "original");
    assert_eq!(second.display_name.as_deref(), Some("Mới"));

    Ok(())
}
