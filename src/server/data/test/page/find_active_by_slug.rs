use super::*;

/// Tests that the public lookup only serves active pages.
#[tokio::test]
async fn only_serves_active_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::page::PageFactory::new(db)
        .slug("gioi-thieu")
        .active(true)
        .build()
        .await?;
    factory::page::PageFactory::new(db)
        .slug("nhap")
        .active(false)
        .build()
        .await?;

    let repo = PageRepository::new(db);

    assert!(repo.find_active_by_slug("gioi-thieu").await?.is_some());
    assert!(repo.find_active_by_slug("nhap").await?.is_none());
    assert!(repo.find_active_by_slug("khong-ton-tai").await?.is_none());

    Ok(())
}
