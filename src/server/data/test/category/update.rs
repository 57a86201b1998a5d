use super::*;

/// Tests updating name, slug, and description.
#[tokio::test]
async fn updates_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create(params("Cũ", "cu")).await?;

    let updated = repo
        .update(UpdateCategoryParams {
            id: category.id,
            name: "Mới".to_string(),
            slug: "moi".to_string(),
            description: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Mới");
    assert_eq!(updated.slug, "moi");
    assert!(updated.description.is_none());

    Ok(())
}

/// Tests that updating a missing id returns None.
#[tokio::test]
async fn missing_id_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    let result = repo
        .update(UpdateCategoryParams {
            id: 42,
            name: "Không Có".to_string(),
            slug: "khong-co".to_string(),
            description: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
