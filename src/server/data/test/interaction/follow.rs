use super::*;

/// Tests follow/unfollow round trip per (user, story).
#[tokio::test]
async fn follow_roundtrip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_interaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = InteractionRepository::new(db);

    assert!(repo.follow(reader.id, story.id).await?);
    assert!(!repo.follow(reader.id, story.id).await?);
    assert!(repo.follows(reader.id, story.id).await?);

    assert!(repo.unfollow(reader.id, story.id).await?);
    assert!(!repo.follows(reader.id, story.id).await?);

    Ok(())
}
