use super::*;

/// Tests that the slug probe is scoped to one story.
///
/// Two stories may both have a "chuong-1"; only a collision within the same
/// story counts.
#[tokio::test]
async fn probe_is_scoped_per_story() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, story_a) = create_story_with_author(db).await?;
    let story_b = factory::story::create_story(db, author.id).await?;

    let repo = ChapterRepository::new(db);
    repo.create(create_params(story_a.id, author.id, "Chương 1", "chuong-1", 1))
        .await?;

    assert!(repo.slug_exists(story_a.id, "chuong-1").await?);
    assert!(!repo.slug_exists(story_b.id, "chuong-1").await?);
    assert!(!repo.slug_exists(story_a.id, "chuong-2").await?);

    Ok(())
}
