use super::*;

/// Tests that an empty session is rejected.
#[tokio::test]
async fn rejects_missing_session_user() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests that a session pointing at a removed account is rejected.
#[tokio::test]
async fn rejects_stale_session_user() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));
}

/// Tests that a deactivated account is rejected even with a live session.
#[tokio::test]
async fn rejects_deactivated_account() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await
        .unwrap();

    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled))
    ));
}

/// Tests the happy path with no permission requirements.
#[tokio::test]
async fn resolves_active_session_user() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();

    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let resolved = AuthGuard::new(db, session).require(&[]).await.unwrap();

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.email, user.email);
}
