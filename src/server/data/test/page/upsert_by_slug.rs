use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that upserting by slug is idempotent, matching the seeder's
/// contract.
#[tokio::test]
async fn upsert_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageRepository::new(db);

    let first = repo.upsert_by_slug(params("lien-he", "Liên hệ")).await?;

    let mut refreshed = params("lien-he", "Liên hệ (mới)");
    refreshed.content = "<p>Nội dung mới</p>".to_string();
    let second = repo.upsert_by_slug(refreshed).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.title, "Liên hệ (mới)");

    let total = entity::prelude::Page::find().count(db).await?;
    assert_eq!(total, 1);

    Ok(())
}
