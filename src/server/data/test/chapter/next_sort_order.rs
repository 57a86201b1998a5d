use super::*;

/// Tests that new chapters land at the end of the reading sequence.
#[tokio::test]
async fn starts_at_one_and_appends() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, story) = create_story_with_author(db).await?;

    let repo = ChapterRepository::new(db);

    assert_eq!(repo.next_sort_order(story.id).await?, 1);

    repo.create(create_params(story.id, author.id, "Chương 1", "chuong-1", 1))
        .await?;
    assert_eq!(repo.next_sort_order(story.id).await?, 2);

    repo.create(create_params(story.id, author.id, "Chương 2", "chuong-2", 2))
        .await?;
    assert_eq!(repo.next_sort_order(story.id).await?, 3);

    Ok(())
}

/// Tests that the sequence is scoped per story.
#[tokio::test]
async fn sequences_are_per_story() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, story_a) = create_story_with_author(db).await?;
    let story_b = factory::story::create_story(db, author.id).await?;

    let repo = ChapterRepository::new(db);
    repo.create(create_params(story_a.id, author.id, "Chương 1", "chuong-1", 1))
        .await?;

    assert_eq!(repo.next_sort_order(story_b.id).await?, 1);

    Ok(())
}
