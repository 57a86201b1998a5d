use super::*;

/// Tests the pagination arithmetic on a 45-item collection.
///
/// Expected: page 2 with limit 20 returns 20 items and the total is 45,
/// which the service layer turns into total_pages == 3.
#[tokio::test]
async fn paginates_forty_five_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;

    let repo = StoryRepository::new(db);
    for n in 1..=45 {
        repo.create(create_params(
            author.id,
            &format!("Truyện {:02}", n),
            &format!("truyen-{:02}", n),
        ))
        .await?;
    }

    let filter = StoryFilter {
        sort_by: StorySort::Title,
        sort_order: SortOrder::Asc,
        ..Default::default()
    };

    // Repository pages are zero-indexed; page 2 of the API is page 1 here.
    let (items, total) = repo.get_paginated(&filter, 1, 20).await?;

    assert_eq!(total, 45);
    assert_eq!(items.len(), 20);
    assert_eq!(items[0].title, "Truyện 21");
    assert_eq!(items[19].title, "Truyện 40");

    let (last_page, _) = repo.get_paginated(&filter, 2, 20).await?;
    assert_eq!(last_page.len(), 5);

    Ok(())
}

/// Tests the published-only constraint of public listings.
#[tokio::test]
async fn published_only_hides_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    factory::story::StoryFactory::new(db, author.id)
        .published(true)
        .build()
        .await?;
    factory::story::StoryFactory::new(db, author.id)
        .published(false)
        .build()
        .await?;

    let repo = StoryRepository::new(db);

    let filter = StoryFilter {
        published_only: true,
        ..Default::default()
    };
    let (_, total) = repo.get_paginated(&filter, 0, 10).await?;
    assert_eq!(total, 1);

    let (_, all) = repo.get_paginated(&StoryFilter::default(), 0, 10).await?;
    assert_eq!(all, 2);

    Ok(())
}

/// Tests the search filter over title and author name.
#[tokio::test]
async fn search_matches_title_and_author_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;

    let repo = StoryRepository::new(db);
    let mut by_title = create_params(author.id, "Hồ Sơ Án Đêm", "ho-so-an-dem");
    by_title.author_name = "Người Khác".to_string();
    repo.create(by_title).await?;

    let mut by_author = create_params(author.id, "Truyện Khác", "truyen-khac");
    by_author.author_name = "Đêm Trắng".to_string();
    repo.create(by_author).await?;

    repo.create(create_params(author.id, "Không Khớp", "khong-khop"))
        .await?;

    let filter = StoryFilter {
        search: Some("Đêm".to_string()),
        ..Default::default()
    };
    let (_, total) = repo.get_paginated(&filter, 0, 10).await?;

    assert_eq!(total, 2);

    Ok(())
}

/// Tests the category filter.
#[tokio::test]
async fn category_filter_narrows_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    let category = factory::category::create_category(db).await?;

    let repo = StoryRepository::new(db);
    let mut tagged = create_params(author.id, "Có Thể Loại", "co-the-loai");
    tagged.category_ids = vec![category.id];
    repo.create(tagged).await?;

    repo.create(create_params(author.id, "Không Thể Loại", "khong-the-loai"))
        .await?;

    let filter = StoryFilter {
        category_id: Some(category.id),
        ..Default::default()
    };
    let (items, total) = repo.get_paginated(&filter, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(items[0].title, "Có Thể Loại");

    Ok(())
}

/// Tests sort by view count descending.
#[tokio::test]
async fn sorts_by_view_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;

    let repo = StoryRepository::new(db);
    let quiet = repo
        .create(create_params(author.id, "Ít Xem", "it-xem"))
        .await?;
    let popular = repo
        .create(create_params(author.id, "Nhiều Xem", "nhieu-xem"))
        .await?;

    for _ in 0..3 {
        repo.increment_view(popular.id).await?;
    }
    repo.increment_view(quiet.id).await?;

    let filter = StoryFilter {
        sort_by: StorySort::ViewCount,
        sort_order: SortOrder::Desc,
        ..Default::default()
    };
    let (items, _) = repo.get_paginated(&filter, 0, 10).await?;

    assert_eq!(items[0].title, "Nhiều Xem");
    assert_eq!(items[0].view_count, 3);

    Ok(())
}

/// Tests that chapter counts ride along with list items.
#[tokio::test]
async fn carries_chapter_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_author(db).await?;
    let story = factory::story::create_story(db, author.id).await?;

    factory::chapter::create_chapter(db, story.id, author.id).await?;
    factory::chapter::create_chapter(db, story.id, author.id).await?;

    let repo = StoryRepository::new(db);
    let (items, _) = repo.get_paginated(&StoryFilter::default(), 0, 10).await?;

    assert_eq!(items[0].chapter_count, 2);

    Ok(())
}
