use super::*;

/// Tests explicit reordering.
#[tokio::test]
async fn moves_chapter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, story) = create_story_with_author(db).await?;

    let repo = ChapterRepository::new(db);
    let chapter = repo
        .create(create_params(story.id, author.id, "Chương 1", "chuong-1", 1))
        .await?;

    assert!(repo.set_sort_order(chapter.id, 7).await?);
    assert_eq!(repo.find_by_id(chapter.id).await?.unwrap().sort_order, 7);

    assert!(!repo.set_sort_order(9999, 1).await?);

    Ok(())
}

/// Tests the publish toggle used by moderation.
#[tokio::test]
async fn toggles_publication() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, story) = create_story_with_author(db).await?;

    let repo = ChapterRepository::new(db);
    let chapter = repo
        .create(create_params(story.id, author.id, "Chương 1", "chuong-1", 1))
        .await?;

    assert!(repo.set_published(chapter.id, false).await?);
    assert!(!repo.find_by_id(chapter.id).await?.unwrap().is_published);

    Ok(())
}
