use super::*;

/// Tests that a regular user cannot use author endpoints.
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
        .require(&[Permission::Author])
        .await;

    assert!(result.is_err());
}

/// Tests that authors pass the author requirement.
#[tokio::test]
async fn allows_author() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let author = factory::user::create_author(db).await.unwrap();
    AuthSession::new(session).set_user_id(author.id).await.unwrap();

    let resolved = AuthGuard::new(db, session)
        .require(&[Permission::Author])
        .await
        .unwrap();

    assert_eq!(resolved.role, UserRole::Author);
}

/// Tests that admins satisfy the author requirement too.
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

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Author])
        .await;

    assert!(result.is_ok());
}
