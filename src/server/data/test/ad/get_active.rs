use super::*;

/// Tests delivery filtering by active flag, type, and placement slot.
#[tokio::test]
async fn filters_by_type_and_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ad)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ad::AdFactory::new(db)
        .ad_type(entity::ad::AdType::Banner)
        .position("top")
        .build()
        .await?;
    factory::ad::AdFactory::new(db)
        .ad_type(entity::ad::AdType::Popup)
        .position("center")
        .build()
        .await?;
    factory::ad::AdFactory::new(db)
        .ad_type(entity::ad::AdType::Banner)
        .position("sidebar")
        .active(false)
        .build()
        .await?;

    let repo = AdRepository::new(db);

    // Inactive ads never deliver.
    let all_active = repo.get_active(None, None).await?;
    assert_eq!(all_active.len(), 2);

    let banners = repo
        .get_active(Some(entity::ad::AdType::Banner), None)
        .await?;
    assert_eq!(banners.len(), 1);

    let top = repo.get_active(None, Some("top")).await?;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].position, "top");

    Ok(())
}
