use super::*;

/// Tests the moderation publish transition.
#[tokio::test]
async fn publishes_and_unpublishes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    let story = factory::story::create_story(db, author.id).await?;

    let repo = StoryRepository::new(db);

    assert!(repo.set_published(story.id, true, StoryStatus::Published).await?);
    let published = repo.find_by_id(story.id).await?.unwrap();
    assert!(published.is_published);
    assert_eq!(published.status, StoryStatus::Published);

    assert!(repo.set_published(story.id, false, StoryStatus::Draft).await?);
    let rejected = repo.find_by_id(story.id).await?.unwrap();
    assert!(!rejected.is_published);
    assert_eq!(rejected.status, StoryStatus::Draft);

    // Unknown ids report false so batch results can say "not found".
    assert!(!repo.set_published(9999, true, StoryStatus::Published).await?);

    Ok(())
}

/// Tests the recommendation toggle.
#[tokio::test]
async fn toggles_recommendation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    let story = factory::story::create_story(db, author.id).await?;

    let repo = StoryRepository::new(db);

    assert!(repo.set_recommended(story.id, true).await?);
    assert!(repo.find_by_id(story.id).await?.unwrap().is_recommended);

    Ok(())
}

/// Tests storing a recomputed rating aggregate.
#[tokio::test]
async fn stores_rating_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    let story = factory::story::create_story(db, author.id).await?;

    let repo = StoryRepository::new(db);
    repo.set_rating(story.id, 4.5, 2).await?;

    let refreshed = repo.find_by_id(story.id).await?.unwrap();
    assert_eq!(refreshed.rating, 4.5);
    assert_eq!(refreshed.rating_count, 2);

    Ok(())
}
