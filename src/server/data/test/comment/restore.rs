use super::*;

/// Tests that restore reverses a soft deletion and fixes the counter.
#[tokio::test]
async fn restore_reverses_deletion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let parent = repo.create(story_comment(reader.id, story.id)).await?;
    let child = repo.create(reply(reader.id, story.id, parent.id)).await?;

    repo.soft_delete(child.id).await?;
    assert_eq!(repo.find_by_id(parent.id).await?.unwrap().reply_count, 0);

    assert!(repo.restore(child.id).await?);
    assert!(!repo.find_by_id(child.id).await?.unwrap().is_deleted);
    assert_eq!(repo.find_by_id(parent.id).await?.unwrap().reply_count, 1);

    // Restoring a live comment is a no-op.
    assert!(!repo.restore(child.id).await?);

    Ok(())
}
