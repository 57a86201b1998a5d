use super::*;

/// Tests that verification flips the flag and clears the one-shot token.
#[tokio::test]
async fn verifies_and_clears_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(register_params("verify@example.com", "verify"))
        .await?;

    let found = repo.find_entity_by_verification_token("token123").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    repo.mark_email_verified(user.id).await?;

    let refreshed = repo.find_entity_by_email("verify@example.com").await?.unwrap();
    assert!(refreshed.email_verified);
    assert!(refreshed.verification_token.is_none());

    // The token is spent.
    assert!(repo
        .find_entity_by_verification_token("token123")
        .await?
        .is_none());

    Ok(())
}
