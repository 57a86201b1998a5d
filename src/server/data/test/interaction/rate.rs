use super::*;

/// Tests that re-rating replaces the previous score instead of adding a
/// second row.
#[tokio::test]
async fn re_rating_replaces_score() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_interaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = InteractionRepository::new(db);

    repo.rate(reader.id, story.id, 3).await?;
    repo.rate(reader.id, story.id, 5).await?;

    let (average, count) = repo.aggregate_rating(story.id).await?;
    assert_eq!(count, 1);
    assert_eq!(average, 5.0);

    Ok(())
}

/// Tests the aggregate over several raters.
#[tokio::test]
async fn aggregates_across_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_interaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let repo = InteractionRepository::new(db);
    repo.rate(first.id, story.id, 4).await?;
    repo.rate(second.id, story.id, 5).await?;

    let (average, count) = repo.aggregate_rating(story.id).await?;
    assert_eq!(count, 2);
    assert_eq!(average, 4.5);

    Ok(())
}

/// Tests the empty aggregate.
#[tokio::test]
async fn no_ratings_yields_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_interaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = create_story_with_author(db).await?;

    let repo = InteractionRepository::new(db);
    let (average, count) = repo.aggregate_rating(story.id).await?;

    assert_eq!(count, 0);
    assert_eq!(average, 0.0);

    Ok(())
}
