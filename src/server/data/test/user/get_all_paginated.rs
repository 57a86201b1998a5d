use super::*;

/// Tests pagination over the user listing.
///
/// Expected: page 1 carries `limit` users, the total counts every row.
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let (page_one, total) = repo.get_all_paginated(0, 2, None).await?;

    assert_eq!(page_one.len(), 2);
    assert_eq!(total, 5);

    let (page_three, _) = repo.get_all_paginated(2, 2, None).await?;
    assert_eq!(page_three.len(), 1);

    Ok(())
}

/// Tests the search filter over email, username, and display name.
#[tokio::test]
async fn search_narrows_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("an@example.com")
        .username("an-nguyen")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("binh@example.com")
        .username("binh-tran")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (matches, total) = repo.get_all_paginated(0, 10, Some("binh")).await?;

    assert_eq!(total, 1);
    assert_eq!(matches[0].username, "binh-tran");

    Ok(())
}
