use super::*;

/// Tests creating a local account from registration parameters.
///
/// Expected: Ok with the stored fields matching the parameters, the account
/// active, and the email unverified.
#[tokio::test]
async fn creates_local_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(register_params("thanh@example.com", "thanh"))
        .await?;

    assert_eq!(user.email, "thanh@example.com");
    assert_eq!(user.username, "thanh");
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.provider, AuthProvider::Local);
    assert!(user.is_active);
    assert!(!user.email_verified);
    assert_eq!(user.verification_token.as_deref(), Some("token123"));

    Ok(())
}

/// Tests that the unique email constraint rejects duplicates.
///
/// Expected: second insert with the same email fails.
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(register_params("dup@example.com", "first"))
        .await?;

    let result = repo
        .create(register_params("dup@example.com", "second"))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the existence probes used during registration validation.
#[tokio::test]
async fn existence_probes_match_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(register_params("probe@example.com", "probe"))
        .await?;

    assert!(repo.email_exists("probe@example.com").await?);
    assert!(!repo.email_exists("other@example.com").await?);
    assert!(repo.username_exists("probe").await?);
    assert!(!repo.username_exists("probe2").await?);

    Ok(())
}
