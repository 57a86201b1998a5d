use super::*;

/// Tests creating a top-level comment with the commenting user resolved.
#[tokio::test]
async fn creates_comment_with_user_data() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let reader = factory::user::UserFactory::new(db)
        .display_name("Độc Giả")
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let comment = repo.create(story_comment(reader.id, story.id)).await?;

    assert_eq!(comment.content, "Truyện hay quá!");
    assert_eq!(comment.username, "Độc Giả");
    assert_eq!(comment.reply_count, 0);
    assert!(comment.parent_id.is_none());

    Ok(())
}

/// Tests that creating a reply bumps the parent's reply count.
#[tokio::test]
async fn reply_increments_parent_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let parent = repo.create(story_comment(reader.id, story.id)).await?;

    repo.create(reply(reader.id, story.id, parent.id)).await?;
    repo.create(reply(reader.id, story.id, parent.id)).await?;

    let refreshed = repo.find_by_id(parent.id).await?.unwrap();
    assert_eq!(refreshed.reply_count, 2);

    Ok(())
}
