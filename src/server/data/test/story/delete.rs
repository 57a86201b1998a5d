use super::*;

/// Tests deletion, including the missing-id case.
#[tokio::test]
async fn deletes_story() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    let story = factory::story::create_story(db, author.id).await?;

    let repo = StoryRepository::new(db);

    assert!(repo.delete(story.id).await?);
    assert!(repo.find_by_id(story.id).await?.is_none());
    assert!(!repo.delete(story.id).await?);

    Ok(())
}
