use super::*;

/// Tests the story thread listing: top-level only, newest first, deleted
/// rows kept so the thread shape survives.
#[tokio::test]
async fn lists_top_level_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let first = repo.create(story_comment(reader.id, story.id)).await?;
    repo.create(reply(reader.id, story.id, first.id)).await?;
    let second = repo.create(story_comment(reader.id, story.id)).await?;
    repo.soft_delete(second.id).await?;

    let (comments, total) = repo.get_for_story(story.id, 0, 10).await?;

    // Replies are excluded; the deleted top-level comment stays.
    assert_eq!(total, 2);
    assert!(comments.iter().all(|c| c.parent_id.is_none()));
    assert!(comments.iter().any(|c| c.is_deleted));

    Ok(())
}

/// Tests reply listing in chronological order.
#[tokio::test]
async fn lists_replies_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let parent = repo.create(story_comment(reader.id, story.id)).await?;

    let mut early = reply(reader.id, story.id, parent.id);
    early.content = "đầu tiên".to_string();
    let early = repo.create(early).await?;

    let mut late = reply(reader.id, story.id, parent.id);
    late.content = "thứ hai".to_string();
    repo.create(late).await?;

    let (replies, total) = repo.get_replies(parent.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(replies[0].id, early.id);

    Ok(())
}
