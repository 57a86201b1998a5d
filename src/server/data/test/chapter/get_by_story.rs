use super::*;

/// Tests reading-order listing and the published-only view.
#[tokio::test]
async fn lists_in_reading_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, story) = create_story_with_author(db).await?;

    let repo = ChapterRepository::new(db);
    // Insert out of order; listing must follow sort_order.
    repo.create(create_params(story.id, author.id, "Chương 2", "chuong-2", 2))
        .await?;
    repo.create(create_params(story.id, author.id, "Chương 1", "chuong-1", 1))
        .await?;

    let mut draft = create_params(story.id, author.id, "Chương 3", "chuong-3", 3);
    draft.is_published = false;
    repo.create(draft).await?;

    let all = repo.get_by_story(story.id, false).await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].slug, "chuong-1");
    assert_eq!(all[1].slug, "chuong-2");

    let published = repo.get_by_story(story.id, true).await?;
    assert_eq!(published.len(), 2);

    Ok(())
}

/// Tests slug lookup within a story.
#[tokio::test]
async fn finds_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, story) = create_story_with_author(db).await?;

    let repo = ChapterRepository::new(db);
    repo.create(create_params(story.id, author.id, "Chương 1", "chuong-1", 1))
        .await?;

    assert!(repo.find_by_slug(story.id, "chuong-1").await?.is_some());
    assert!(repo.find_by_slug(story.id, "chuong-9").await?.is_none());

    Ok(())
}
