use super::*;

/// Tests creating a story without categories.
///
/// Expected: Ok with draft defaults and zeroed counters.
#[tokio::test]
async fn creates_story_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;

    let repo = StoryRepository::new(db);
    let story = repo
        .create(create_params(author.id, "Kiếm Động Cửu Thiên", "kiem-dong-cuu-thien"))
        .await?;

    assert_eq!(story.title, "Kiếm Động Cửu Thiên");
    assert_eq!(story.slug, "kiem-dong-cuu-thien");
    assert_eq!(story.status, StoryStatus::Draft);
    assert!(!story.is_published);
    assert_eq!(story.view_count, 0);
    assert_eq!(story.rating_count, 0);

    Ok(())
}

/// Tests creating a story with category associations.
#[tokio::test]
async fn creates_story_with_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    let cat_a = factory::category::create_category(db).await?;
    let cat_b = factory::category::create_category(db).await?;

    let repo = StoryRepository::new(db);
    let mut params = create_params(author.id, "Đa Thể Loại", "da-the-loai");
    params.category_ids = vec![cat_a.id, cat_b.id];

    let story = repo.create(params).await?;

    let (_, categories) = repo
        .find_by_id_with_categories(story.id)
        .await?
        .unwrap();

    assert_eq!(categories.len(), 2);

    Ok(())
}

/// Tests the slug probe used by disambiguation.
#[tokio::test]
async fn slug_probe_matches_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;

    let repo = StoryRepository::new(db);
    repo.create(create_params(author.id, "Một", "mot")).await?;

    assert!(repo.slug_exists("mot").await?);
    assert!(!repo.slug_exists("mot-1").await?);

    Ok(())
}
