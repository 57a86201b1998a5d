use super::*;

/// Tests that view increments accumulate.
#[tokio::test]
async fn accumulates_views() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    let story = factory::story::create_story(db, author.id).await?;

    let repo = StoryRepository::new(db);
    repo.increment_view(story.id).await?;
    repo.increment_view(story.id).await?;

    assert_eq!(repo.find_by_id(story.id).await?.unwrap().view_count, 2);

    Ok(())
}

/// Tests the like/follow counter adjustments in both directions.
#[tokio::test]
async fn adjusts_like_and_follow_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    let story = factory::story::create_story(db, author.id).await?;

    let repo = StoryRepository::new(db);
    repo.adjust_like_count(story.id, 1).await?;
    repo.adjust_like_count(story.id, 1).await?;
    repo.adjust_like_count(story.id, -1).await?;
    repo.adjust_follow_count(story.id, 1).await?;

    let refreshed = repo.find_by_id(story.id).await?.unwrap();
    assert_eq!(refreshed.like_count, 1);
    assert_eq!(refreshed.follow_count, 1);

    Ok(())
}
