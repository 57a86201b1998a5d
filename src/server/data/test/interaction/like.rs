use super::*;

/// Tests that likes are idempotent per (user, story).
#[tokio::test]
async fn like_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_interaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = InteractionRepository::new(db);

    assert!(repo.like(reader.id, story.id).await?);
    // Second like inserts nothing, so callers know not to bump the counter.
    assert!(!repo.like(reader.id, story.id).await?);
    assert!(repo.likes(reader.id, story.id).await?);

    Ok(())
}

/// Tests unlike, including the not-liked case.
#[tokio::test]
async fn unlike_removes_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_interaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = InteractionRepository::new(db);
    repo.like(reader.id, story.id).await?;

    assert!(repo.unlike(reader.id, story.id).await?);
    assert!(!repo.likes(reader.id, story.id).await?);
    assert!(!repo.unlike(reader.id, story.id).await?);

    Ok(())
}
