use super::*;

/// Tests updating content and derived fields.
#[tokio::test]
async fn updates_content_and_derived_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, story) = create_story_with_author(db).await?;

    let repo = ChapterRepository::new(db);
    let chapter = repo
        .create(create_params(story.id, author.id, "Chương 1", "chuong-1", 1))
        .await?;

    let updated = repo
        .update(UpdateChapterParams {
            id: chapter.id,
            title: "Chương 1 (sửa)".to_string(),
            slug: Some("chuong-1-sua".to_string()),
            content: "<p>nội dung dài hơn một chút</p>".to_string(),
            word_count: 6,
            reading_time: 1,
            is_published: false,
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Chương 1 (sửa)");
    assert_eq!(updated.slug, "chuong-1-sua");
    assert_eq!(updated.word_count, 6);
    assert!(!updated.is_published);

    Ok(())
}

/// Tests that updating a missing id returns None.
#[tokio::test]
async fn missing_id_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChapterRepository::new(db);

    let result = repo
        .update(UpdateChapterParams {
            id: 42,
            title: "Không Có".to_string(),
            slug: None,
            content: String::new(),
            word_count: 0,
            reading_time: 0,
            is_published: false,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
