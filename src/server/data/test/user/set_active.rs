use super::*;

/// Tests the moderation activation toggle.
#[tokio::test]
async fn toggles_activation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.set_active(user.id, false).await?);
    assert!(!repo.find_by_id(user.id).await?.unwrap().is_active);

    assert!(repo.set_active(user.id, true).await?);
    assert!(repo.find_by_id(user.id).await?.unwrap().is_active);

    Ok(())
}

/// Tests role changes, including the unknown-id case.
#[tokio::test]
async fn sets_role_and_reports_missing_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.set_role(user.id, UserRole::Author).await?);
    assert_eq!(
        repo.find_by_id(user.id).await?.unwrap().role,
        UserRole::Author
    );

    assert!(!repo.set_role(9999, UserRole::Admin).await?);

    Ok(())
}
