use super::*;

/// Tests updating story fields and replacing category associations.
#[tokio::test]
async fn updates_fields_and_replaces_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    let cat_a = factory::category::create_category(db).await?;
    let cat_b = factory::category::create_category(db).await?;

    let repo = StoryRepository::new(db);
    let mut params = create_params(author.id, "Bản Cũ", "ban-cu");
    params.category_ids = vec![cat_a.id];
    let story = repo.create(params).await?;

    let updated = repo
        .update(UpdateStoryParams {
            id: story.id,
            title: "Bản Mới".to_string(),
            slug: Some("ban-moi".to_string()),
            description: Some("Mô tả".to_string()),
            cover_image: None,
            tags: Some("kiếm,hiệp".to_string()),
            country: None,
            status: StoryStatus::Ongoing,
            category_ids: vec![cat_b.id],
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Bản Mới");
    assert_eq!(updated.slug, "ban-moi");
    assert_eq!(updated.status, StoryStatus::Ongoing);

    let (_, categories) = repo.find_by_id_with_categories(story.id).await?.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, cat_b.id);

    Ok(())
}

/// Tests that a None slug keeps the existing one.
#[tokio::test]
async fn keeps_slug_when_not_regenerated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;

    let repo = StoryRepository::new(db);
    let story = repo
        .create(create_params(author.id, "Giữ Slug", "giu-slug"))
        .await?;

    let updated = repo
        .update(UpdateStoryParams {
            id: story.id,
            title: "Giữ Slug".to_string(),
            slug: None,
            description: None,
            cover_image: None,
            tags: None,
            country: None,
            status: StoryStatus::Draft,
            category_ids: vec![],
        })
        .await?
        .unwrap();

    assert_eq!(updated.slug, "giu-slug");

    Ok(())
}
