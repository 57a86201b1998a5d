use super::*;

/// Tests creating a chapter with derived fields.
#[tokio::test]
async fn creates_chapter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, story) = create_story_with_author(db).await?;

    let repo = ChapterRepository::new(db);
    let chapter = repo
        .create(create_params(story.id, author.id, "Chương 1", "chuong-1", 1))
        .await?;

    assert_eq!(chapter.story_id, story.id);
    assert_eq!(chapter.title, "Chương 1");
    assert_eq!(chapter.slug, "chuong-1");
    assert_eq!(chapter.sort_order, 1);
    assert_eq!(chapter.word_count, 5);
    assert_eq!(chapter.reading_time, 1);
    assert_eq!(chapter.view_count, 0);

    Ok(())
}

/// Tests the view counter.
#[tokio::test]
async fn increments_views() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, story) = create_story_with_author(db).await?;

    let repo = ChapterRepository::new(db);
    let chapter = repo
        .create(create_params(story.id, author.id, "Chương 1", "chuong-1", 1))
        .await?;

    repo.increment_view(chapter.id).await?;
    repo.increment_view(chapter.id).await?;

    assert_eq!(repo.find_by_id(chapter.id).await?.unwrap().view_count, 2);

    Ok(())
}
