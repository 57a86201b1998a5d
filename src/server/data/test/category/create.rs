use super::*;

/// Tests creating a category.
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create(params("Tiên Hiệp", "tien-hiep")).await?;

    assert_eq!(category.name, "Tiên Hiệp");
    assert_eq!(category.slug, "tien-hiep");
    assert!(repo.slug_exists("tien-hiep").await?);
    assert!(!repo.slug_exists("kiem-hiep").await?);

    Ok(())
}

/// Tests that the unique name constraint rejects duplicates.
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    repo.create(params("Ngôn Tình", "ngon-tinh")).await?;

    let result = repo.create(params("Ngôn Tình", "ngon-tinh-2")).await;

    assert!(result.is_err());

    Ok(())
}
