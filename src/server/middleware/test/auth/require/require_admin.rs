use super::*;

/// Tests that a regular user is denied admin-gated access.
#[tokio::test]
async fn denies_regular_user() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}

/// Tests that authors are also denied; admin is its own tier.
#[tokio::test]
async fn denies_author() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let author = factory::user::create_author(db).await.unwrap();
    AuthSession::new(session).set_user_id(author.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(result.is_err());
}

/// Tests that admins pass.
#[tokio::test]
async fn allows_admin() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await.unwrap();
    AuthSession::new(session).set_user_id(admin.id).await.unwrap();

    let resolved = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await
        .unwrap();

    assert_eq!(resolved.role, UserRole::Admin);
}
