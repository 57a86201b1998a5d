use super::*;

/// Tests deletion, including the missing-id case.
#[tokio::test]
async fn deletes_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create(params("Xóa", "xoa")).await?;

    assert!(repo.delete(category.id).await?);
    assert!(repo.find_by_id(category.id).await?.is_none());
    assert!(!repo.delete(category.id).await?);

    Ok(())
}
