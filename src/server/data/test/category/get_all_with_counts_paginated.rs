use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests the admin listing: alphabetical order plus story counts.
#[tokio::test]
async fn lists_with_story_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    let story = factory::story::create_story(db, author.id).await?;

    let repo = CategoryRepository::new(db);
    let linked = repo.create(params("Kiếm Hiệp", "kiem-hiep")).await?;
    repo.create(params("Trinh Thám", "trinh-tham")).await?;

    entity::story_category::ActiveModel {
        story_id: ActiveValue::Set(story.id),
        category_id: ActiveValue::Set(linked.id),
    }
    .insert(db)
    .await?;

    let (categories, total) = repo.get_all_with_counts_paginated(0, 10).await?;

    assert_eq!(total, 2);
    // Alphabetical: Kiếm Hiệp before Trinh Thám.
    assert_eq!(categories[0].category.name, "Kiếm Hiệp");
    assert_eq!(categories[0].story_count, 1);
    assert_eq!(categories[1].story_count, 0);

    Ok(())
}
