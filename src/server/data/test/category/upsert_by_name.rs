use super::*;

/// Tests that upserting by name is idempotent.
///
/// Seeding runs this path; running it twice must leave the category count
/// unchanged and only refresh the description.
#[tokio::test]
async fn upsert_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    let first = repo.upsert_by_name(params("Đô Thị", "do-thi")).await?;
    assert_eq!(repo.count().await?, 1);

    let mut updated = params("Đô Thị", "do-thi");
    updated.description = Some("Mô tả mới".to_string());
    let second = repo.upsert_by_name(updated).await?;

    assert_eq!(repo.count().await?, 1);
    assert_eq!(first.id, second.id);
    assert_eq!(second.description.as_deref(), Some("Mô tả mới"));

    Ok(())
}

/// Tests that distinct names create distinct rows.
#[tokio::test]
async fn distinct_names_create_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    repo.upsert_by_name(params("Lịch Sử", "lich-su")).await?;
    repo.upsert_by_name(params("Khoa Huyễn", "khoa-huyen")).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
