use super::*;

/// Tests that deletion is soft and keeps the row.
#[tokio::test]
async fn marks_deleted_without_removing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo.create(story_comment(reader.id, story.id)).await?;

    assert!(repo.soft_delete(comment.id).await?);

    let refreshed = repo.find_by_id(comment.id).await?.unwrap();
    assert!(refreshed.is_deleted);

    Ok(())
}

/// Tests that deleting twice only adjusts the parent counter once.
#[tokio::test]
async fn double_delete_decrements_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let parent = repo.create(story_comment(reader.id, story.id)).await?;
    let child = repo.create(reply(reader.id, story.id, parent.id)).await?;

    assert_eq!(repo.find_by_id(parent.id).await?.unwrap().reply_count, 1);

    assert!(repo.soft_delete(child.id).await?);
    assert!(!repo.soft_delete(child.id).await?);

    assert_eq!(repo.find_by_id(parent.id).await?.unwrap().reply_count, 0);

    Ok(())
}
